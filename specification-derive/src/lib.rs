extern crate proc_macro;

mod ast;
mod expand;

use proc_macro::TokenStream;
use syn::Error;

use crate::ast::SchemaDef;

///
/// Macro that makes declaring an EBML schema easy.
///
/// The macro declares a unit struct and implements [`Schema`][schema] for it from a list of `Path/To/Name: Type = id` lines.  The path of an element determines its level in the document tree: `EBML` is a root element (level 0), `EBML/EBMLVersion` is at level 1, and so on.  Every parent named in a path must itself be declared, must be of `Master` type, and must have been declared with the same path prefix.
///
/// `Type` is one of `Master`, `UnsignedInt`, `Integer`, `Float`, `String`, `Utf8`, `Date` or `Binary`.
///
/// Two attributes are understood on element lines:
///   * __#[global]__ - the element may appear at any depth and has no level.  Global elements cannot declare a path.
///   * __#[name = "..."]__ - the element's schema name, when it is not a valid Rust identifier (e.g. `CRC-32`).
///
/// The generated struct also exposes `ELEMENTS`, every declared [`ElementInfo`][info] in declaration order.
///
/// ```
/// # pub mod ebml_stream { pub mod specs {
/// #    pub use ebml_stream_specification::{ElementInfo, ElementType, Schema};
/// # }}
/// use ebml_stream_specification::{ElementType, Schema};
/// use ebml_stream_specification_derive::ebml_schema;
///
/// ebml_schema! {
///     pub struct Example {
///         EBML: Master = 0x1a45dfa3,
///         EBML/EBMLVersion: UnsignedInt = 0x4286,
///         #[global]
///         #[name = "CRC-32"]
///         Crc32: Binary = 0xbf,
///     }
/// }
///
/// assert_eq!(Some(0x4286), Example.name_to_id("EBMLVersion"));
/// assert_eq!(Some(1), Example.id_to_info(0x4286).level);
/// assert_eq!(Some(ElementType::Binary), Example.id_to_info(0xbf).element_type);
/// assert_eq!("unknown", Example.id_to_info(0x1234).name);
/// ```
///
/// [schema]: ebml_stream_specification::Schema
/// [info]: ebml_stream_specification::ElementInfo

#[proc_macro]
pub fn ebml_schema(input: TokenStream) -> TokenStream {
    let input = match syn::parse::<SchemaDef>(input) {
        Ok(syntax_tree) => syntax_tree,
        Err(err) => {
            return TokenStream::from(Error::new(err.span(), "ebml_schema! {} content must be of format: struct Name {\
                Root: Type = id,\
                Path/Of/Component: Type = id,\
                // example\
                EBML: Master = 0x1a45dfa3,\
                EBML/EBMLVersion: UnsignedInt = 0x4286,\
                // global elements have no path:\
                #[global] Void: Binary = 0xec,\
            }").to_compile_error())
        },
    };

    expand::expand(input).unwrap_or_else(|err| err.to_compile_error()).into()
}
