use ::mockito::ServerGuard;

use crate::TestContext;

pub mod data;
pub mod factory;
pub mod mockito;

impl TestContext {
    /// Access ESI mock endpoint helpers for endpoints added after `build()`.
    pub fn esi<'a>(&'a mut self) -> EsiFixtures<'a> {
        EsiFixtures::new(&mut self.server)
    }
}

pub struct EsiFixtures<'a> {
    server: &'a mut ServerGuard,
}

impl<'a> EsiFixtures<'a> {
    pub fn new(server: &'a mut ServerGuard) -> Self {
        Self { server }
    }
}
