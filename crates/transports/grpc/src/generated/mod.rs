//! Generated protobuf bindings for the NEST gateway contract
//!
//! Populated by `build.rs` from `protos/nest.proto`. Do not edit the
//! generated file by hand.

#[allow(clippy::all)]
pub mod nest {
    include!("com.nbp.cdncp.nest.grpc.proto.v1.rs");
}

pub use nest::nest_service_client::NestServiceClient;
pub use nest::nest_service_server::{NestService, NestServiceServer};
pub use nest::{NestRequest, NestResponse};
