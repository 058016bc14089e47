pub mod app;
pub mod batch;
pub mod host;
pub mod result;
pub mod workunit;

pub use app::Entity as App;
pub use batch::Entity as Batch;
pub use host::Entity as Host;
pub use workunit::Entity as Workunit;
