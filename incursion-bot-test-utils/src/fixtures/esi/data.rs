//! Well-known IDs and names shared by fixtures.
//!
//! The values match live ESI data so fixtures read like real responses.

pub const SANSHA_FACTION_ID: i64 = 500019;
pub const SANSHA_FACTION_NAME: &str = "Sansha's Nation";

pub const KIMOTORO_CONSTELLATION_ID: i64 = 20000020;
pub const KIMOTORO_CONSTELLATION_NAME: &str = "Kimotoro";

pub const OTSELA_CONSTELLATION_ID: i64 = 20000301;
pub const OTSELA_CONSTELLATION_NAME: &str = "Otsela";

pub const JITA_SYSTEM_ID: i64 = 30000142;
pub const JITA_SYSTEM_NAME: &str = "Jita";
pub const JITA_SECURITY_STATUS: f64 = 0.9459131360054016;

pub const PERIMETER_SYSTEM_ID: i64 = 30000144;
pub const PERIMETER_SYSTEM_NAME: &str = "Perimeter";

pub const AMARR_SYSTEM_ID: i64 = 30002187;
pub const AMARR_SYSTEM_NAME: &str = "Amarr";

pub const TAMA_SYSTEM_ID: i64 = 30002813;
pub const TAMA_SYSTEM_NAME: &str = "Tama";
pub const TAMA_SECURITY_STATUS: f64 = 0.3;

pub const NIARJA_SYSTEM_ID: i64 = 30003504;
pub const NIARJA_SYSTEM_NAME: &str = "Niarja";
