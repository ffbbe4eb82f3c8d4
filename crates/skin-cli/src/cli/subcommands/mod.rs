mod cart;
mod product;
mod progress;
mod quiz;
mod review;
mod routine;

pub use cart::CartCommands;
pub use product::ProductCommands;
pub use progress::ProgressCommands;
pub use quiz::QuizCommands;
pub use review::ReviewCommands;
pub use routine::RoutineCommands;
