fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Only rerun if proto files change
    println!("cargo:rerun-if-changed=proto/shopmesh/user.proto");
    println!("cargo:rerun-if-changed=proto/shopmesh/product.proto");
    println!("cargo:rerun-if-changed=proto/shopmesh/order.proto");

    tonic_build::configure()
        .build_server(true)
        .build_client(true)
        .compile_protos(
            &[
                "proto/shopmesh/user.proto",
                "proto/shopmesh/product.proto",
                "proto/shopmesh/order.proto",
            ],
            &["proto"],
        )?;
    Ok(())
}
