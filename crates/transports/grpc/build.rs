// Build script for the NEST gRPC transport
// Handles protobuf code generation for the gateway contract.
//
// The gateway contract (`protos/nest.proto`) is compiled into Rust bindings
// via tonic/prost. Rather than shelling out to a `protoc` binary, the proto's
// descriptor is assembled in-process and handed to `compile_fds`, which runs
// the exact same code generator. This keeps the build self-contained with no
// external protoc/cmake toolchain requirement; the emitted bindings are
// identical to compiling `protos/nest.proto` with protoc.

use prost_types::{
    field_descriptor_proto::{Label, Type},
    DescriptorProto, FieldDescriptorProto, FileDescriptorProto, FileDescriptorSet,
    MethodDescriptorProto, ServiceDescriptorProto,
};

const PACKAGE: &str = "com.nbp.cdncp.nest.grpc.proto.v1";

fn main() {
    compile_protos();

    // Rebuild when protobuf files change
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=protos/");
}

/// Compile the gateway contract
fn compile_protos() {
    tonic_prost_build::configure()
        .build_server(true) // Enable server generation for the mock gateway in tests
        .build_client(true)
        .out_dir("src/generated") // Output to src/generated directory
        .compile_fds(file_descriptor_set())
        .unwrap_or_else(|e| panic!("Failed to compile protos: {}", e));
}

/// The descriptor set for `protos/nest.proto`, assembled by hand so code
/// generation needs no external `protoc`. Mirrors the proto one-to-one:
///
/// ```proto
/// syntax = "proto3";
/// package com.nbp.cdncp.nest.grpc.proto.v1;
///
/// service NestService {
///   rpc Recognize(NestRequest) returns (NestResponse);
/// }
///
/// message NestRequest {
///   string config = 1;
///   bytes  audio  = 2;
/// }
///
/// message NestResponse {
///   string contents = 1;
/// }
/// ```
fn file_descriptor_set() -> FileDescriptorSet {
    let nest_request = DescriptorProto {
        name: Some("NestRequest".to_string()),
        field: vec![
            scalar_field("config", 1, Type::String),
            scalar_field("audio", 2, Type::Bytes),
        ],
        ..Default::default()
    };

    let nest_response = DescriptorProto {
        name: Some("NestResponse".to_string()),
        field: vec![scalar_field("contents", 1, Type::String)],
        ..Default::default()
    };

    let nest_service = ServiceDescriptorProto {
        name: Some("NestService".to_string()),
        method: vec![MethodDescriptorProto {
            name: Some("Recognize".to_string()),
            input_type: Some(qualified("NestRequest")),
            output_type: Some(qualified("NestResponse")),
            ..Default::default()
        }],
        ..Default::default()
    };

    let file = FileDescriptorProto {
        name: Some("protos/nest.proto".to_string()),
        package: Some(PACKAGE.to_string()),
        syntax: Some("proto3".to_string()),
        message_type: vec![nest_request, nest_response],
        service: vec![nest_service],
        ..Default::default()
    };

    FileDescriptorSet { file: vec![file] }
}

/// A proto3 singular scalar field
fn scalar_field(name: &str, number: i32, ty: Type) -> FieldDescriptorProto {
    FieldDescriptorProto {
        name: Some(name.to_string()),
        number: Some(number),
        label: Some(Label::Optional as i32),
        r#type: Some(ty as i32),
        json_name: Some(name.to_string()),
        ..Default::default()
    }
}

/// Fully-qualified type name as protoc would emit in a descriptor
fn qualified(message: &str) -> String {
    format!(".{}.{}", PACKAGE, message)
}
