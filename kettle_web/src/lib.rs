pub mod constants;
pub mod query;
pub mod request;
pub mod responders;
pub mod response;
pub mod status;
