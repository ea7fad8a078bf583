// ============================================================
// Layer 3 — Domain Layer
// ============================================================
// This is the heart of the application — pure Rust structs
// and traits that define the core concepts of the system.
//
// Rules for this layer:
//   - NO spreadsheet or CSV library types allowed here
//   - NO file I/O
//   - Only plain Rust structs, enums, and traits
//
// Why keep this layer pure?
//   - Easy to unit test (no fixture files needed)
//   - Easy to understand (no library noise)
//   - Easy to swap implementations (just implement the trait)
//
// Think of this layer as the "dictionary" of the system —
// it defines what things ARE, not how they work.
//
// Reference: Rust Book §5 (Structs), §10 (Traits)

// One experimental trial row and the table that holds them
pub mod trial;

// The subject/object co-reference classification
pub mod reference;

// Core abstractions (traits) that the data layer implements
pub mod traits;
