pub mod app_repo;
pub mod batch_repo;
pub mod host_repo;
pub mod result_repo;
pub mod workunit_repo;

pub use app_repo::AppRepository;
pub use batch_repo::BatchRepository;
pub use host_repo::HostRepository;
pub use result_repo::ResultRepository;
pub use workunit_repo::WorkunitRepository;
