//! Entrance tracking and distances to home systems.

use dioxus_logger::tracing;
use futures::future::try_join_all;

use crate::bot::{
    config::BotConfig,
    error::Error,
    esi::EsiClient,
    model::{
        route::RouteFlag,
        state::{BotState, Entrance, HomeDistance},
    },
};

/// Computes jump distances from the incursion entrance to the configured home systems.
pub struct DistanceService<'a> {
    esi_client: &'a EsiClient,
}

impl<'a> DistanceService<'a> {
    /// Creates a new instance of [`DistanceService`]
    pub fn new(esi_client: &'a EsiClient) -> Self {
        Self { esi_client }
    }

    /// Sets the entrance and recomputes the distance to every configured home system
    ///
    /// All lookups happen before the state is touched, so a failure leaves the previous
    /// entrance in place and readers never see an entrance paired with another entrance's
    /// distances.
    ///
    /// # Returns
    /// - `Ok(Entrance)`: The new entrance, also stored in `state`
    /// - `Err(Error)`: The entrance or a home system could not be resolved, or a route lookup failed
    pub async fn set_entrance(
        &self,
        state: &BotState,
        config: &BotConfig,
        location: &str,
    ) -> Result<Entrance, Error> {
        let origin = self
            .esi_client
            .universe()
            .resolve_system(location.trim())
            .await?;

        let distances = try_join_all(
            config
                .home_systems
                .iter()
                .map(|home| self.home_distance(origin.id, home, &config.route_flags)),
        )
        .await?;

        let entrance = Entrance {
            system: origin.name,
            distances,
        };
        state.replace_entrance(entrance.clone()).await;

        tracing::info!(
            "Entrance set to {} with {} home systems",
            entrance.system,
            entrance.distances.len()
        );

        Ok(entrance)
    }

    async fn home_distance(
        &self,
        origin: i64,
        home: &str,
        flags: &[RouteFlag],
    ) -> Result<HomeDistance, Error> {
        let destination = self.esi_client.universe().resolve_system_id(home).await?;

        let mut jumps: Vec<(RouteFlag, u32)> = Vec::with_capacity(flags.len());
        for &flag in flags {
            if jumps.iter().any(|(mode, _)| *mode == flag) {
                continue;
            }

            let length = self
                .esi_client
                .routes()
                .route_length(origin, destination, flag)
                .await?;
            jumps.push((flag, length));
        }

        Ok(HomeDistance {
            system: home.to_string(),
            jumps,
        })
    }
}

/// Formats distances as one line per home system, in configuration order
///
/// Routing modes on a line keep the order of `route_flags`.
///
/// # Example
/// ```ignore
/// // Amarr: 9 jumps (shortest), 12 jumps (secure)
/// let text = format_distances(&entrance.distances);
/// ```
pub fn format_distances(distances: &[HomeDistance]) -> String {
    distances
        .iter()
        .map(|home| {
            let jumps = home
                .jumps
                .iter()
                .map(|(flag, count)| {
                    let unit = if *count == 1 { "jump" } else { "jumps" };
                    format!("{} {} ({})", count, unit, flag)
                })
                .collect::<Vec<_>>()
                .join(", ");

            format!("{}: {}", home.system, jumps)
        })
        .collect::<Vec<_>>()
        .join("\n")
}
