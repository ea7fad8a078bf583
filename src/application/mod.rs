// ============================================================
// Layer 2 — Application / Use Cases
// ============================================================
// This layer orchestrates all the other layers to accomplish
// a specific goal (labeling the experiment spreadsheet).
//
// Rules for this layer:
//   - No string surgery or classification rules here (Layer 3/4)
//   - No UI or printing here (that's Layer 1)
//   - No direct file access (that's Layer 4)
//   - Only workflow coordination
//
// Think of this layer as the "director" — it tells other
// layers what to do but doesn't do the work itself.
//
// Reference: Clean Architecture pattern
//            Rust Book §7 (Module System)

// The labeling workflow
pub mod label_use_case;
