pub mod esi;
