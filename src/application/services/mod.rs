pub mod deferred_task;
pub mod dialog_manager;

pub use deferred_task::DeferredTask;
pub use dialog_manager::DialogManager;
