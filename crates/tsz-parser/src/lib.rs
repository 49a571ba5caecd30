//! Syntax tree snapshots for tsz-essentials.
//!
//! The engine never parses source files. Hosts hand it an immutable tree
//! snapshot through the [`NodeAccess`] trait; [`NodeArena`] is the in-memory
//! implementation used by embedders that convert a foreign tree once per
//! request.
//!
//! Also provided here:
//! - Position lookups over any [`NodeAccess`] (`node_finder`)
//! - Structured function declarations, parsed from a standalone signature
//!   line and printed back to source (`declaration`, `printer`)

pub mod parser;
pub use parser::base::NodeIndex;
pub use parser::node::{Node, SyntaxKind};
pub use parser::node_access::{NodeAccess, identifier_names, skip_identifier};
pub use parser::node_arena::NodeArena;

// Position classification
pub mod node_finder;
pub use node_finder::{find_node_at_exact_offset, find_node_at_max_depth, find_node_at_offset};

// Structured declarations
pub mod declaration;
pub use declaration::{
    BindingElement, BindingName, FunctionDeclaration, ParameterDeclaration, PropertySignature,
    TypeNode, find_matching_close, parse_function_signature, split_top_level,
};

// Declaration printing
pub mod printer;
pub use printer::DeclarationPrinter;

#[cfg(test)]
#[path = "tests/node_arena_tests.rs"]
mod node_arena_tests;

#[cfg(test)]
#[path = "tests/declaration_tests.rs"]
mod declaration_tests;

#[cfg(test)]
#[path = "tests/printer_tests.rs"]
mod printer_tests;
