mod job_source;
mod remote_type;

pub use job_source::JobSource;
pub use remote_type::RemoteType;
