// HTTP routes
pub mod alerts;
pub mod glossary;
pub mod health;
pub mod pages;

pub use alerts::*;
pub use glossary::*;
pub use health::*;
pub use pages::*;
