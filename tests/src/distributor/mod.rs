// =============================================================================
// NFT Distributor Integration Tests
// =============================================================================
// Sandbox tests for the nft-distributor contract. Build the WASM first:
//
//   cargo near build non-reproducible-wasm --manifest-path contracts/nft-distributor/Cargo.toml
//   cargo test -p nft-distributor-integration-tests
//
// Tests return early when the WASM is missing.
