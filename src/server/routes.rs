mod api;

pub use api::ApiRocketBuildExt;
