pub mod collision;
pub mod crazy;
pub mod intent;
pub mod movement;
pub mod scoring;

pub use collision::*;
pub use crazy::*;
pub use intent::*;
pub use movement::*;
pub use scoring::*;
