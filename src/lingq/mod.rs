pub mod api;

pub use api::{ Hint, Language, Lingq, LingqClient };
