//! Centralized limits and thresholds.
//!
//! Bounds on the walks the engine performs over host-provided syntax trees
//! and type graphs.

// =============================================================================
// Recursion Depth Limits
// =============================================================================

/// Maximum descent depth for position lookups in a syntax tree.
///
/// Position lookups walk from the root towards the deepest node containing an
/// offset. Real files rarely nest deeper than a few hundred levels; past this
/// depth the lookup returns the deepest node reached so far.
///
/// # TypeScript example
///
/// ```typescript
/// // Deeply nested call arguments:
/// f(f(f(f(f(f(f(f(f(f(/* ... hundreds of levels ... */))))))))));
/// ```
pub const MAX_NODE_FIND_DEPTH: u32 = 500;

/// Maximum nesting depth when classifying union members.
///
/// Unions returned by an oracle are normally flat, but an oracle may hand
/// back a union whose member is itself a union. Classification recurses
/// into such members; at this depth a member is treated as unclassifiable.
pub const MAX_UNION_CLASSIFY_DEPTH: u32 = 32;

// =============================================================================
// Operation Counts
// =============================================================================

/// Maximum number of numeric suffixes tried when generating a fresh name.
///
/// `ExtractedComponent`, `ExtractedComponent_1`, ... are tried in order. A
/// file would need this many colliding identifiers to exhaust the search.
pub const MAX_UNIQUE_NAME_ATTEMPTS: u32 = 10_000;
