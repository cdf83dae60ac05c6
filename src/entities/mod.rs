pub mod done;
pub mod task;

pub use done::Entity as Done;
pub use task::Entity as Task;
