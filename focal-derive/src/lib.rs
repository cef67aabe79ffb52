//! Derive macros for focal optics.
//!
//! # Available Derive Macros
//!
//! - [`Lenses`]: Generates a lens constructor for every named struct field
//! - [`Prisms`]: Generates a prism constructor for every enum variant
//!
//! # Example: Lenses
//!
//! ```rust,ignore
//! use focal::Lenses;
//! use focal::optics::Lens;
//!
//! #[derive(Clone, Lenses)]
//! struct Point {
//!     x: i32,
//!     y: i32,
//! }
//!
//! // Generated methods:
//! // - Point::x_lens() -> impl Lens<Point, i32>
//! // - Point::y_lens() -> impl Lens<Point, i32>
//!
//! let point = Point { x: 10, y: 20 };
//! assert_eq!(Point::x_lens().get(&point), 10);
//! ```
//!
//! # Example: Prisms
//!
//! ```rust,ignore
//! use focal::Prisms;
//! use focal::optics::Prism;
//!
//! #[derive(Clone, Prisms)]
//! enum Shape {
//!     Circle(f64),
//!     Rectangle(f64, f64),
//! }
//!
//! // Generated methods:
//! // - Shape::circle_prism() -> impl Prism<Shape, f64>
//! // - Shape::rectangle_prism() -> impl Prism<Shape, (f64, f64)>
//!
//! assert_eq!(Shape::circle_prism().get_option(&Shape::Circle(5.0)), Some(5.0));
//! assert_eq!(
//!     Shape::rectangle_prism().get_option(&Shape::Rectangle(3.0, 4.0)),
//!     Some((3.0, 4.0))
//! );
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

mod lenses;
mod prisms;

use proc_macro::TokenStream;

/// Derive macro generating a lens constructor for each named field.
///
/// For each field `foo: T`, generates:
///
/// ```rust,ignore
/// impl StructName {
///     pub fn foo_lens() -> impl Lens<StructName, T> + Clone { ... }
/// }
/// ```
///
/// The lens clones the field on `get`, so every field type must be `Clone`.
///
/// # Requirements
///
/// - The struct must have named fields (not a tuple or unit struct)
///
/// # Generics
///
/// Generic structs are supported; call the constructor on a concrete type:
///
/// ```rust,ignore
/// #[derive(Clone, Lenses)]
/// struct Container<T> {
///     value: T,
/// }
///
/// let lens = Container::<i32>::value_lens();
/// assert_eq!(lens.get(&Container { value: 42 }), 42);
/// ```
#[proc_macro_derive(Lenses)]
pub fn derive_lenses(input: TokenStream) -> TokenStream {
    lenses::derive_lenses_impl(input)
}

/// Derive macro generating a prism constructor for each enum variant.
///
/// The constructor is named `{variant_name_snake_case}_prism()`. The focused
/// part depends on the shape of the variant:
///
/// - **Unit variants** (e.g., `Empty`): `()`
/// - **Single-field tuple variants** (e.g., `Circle(f64)`): the field
/// - **Multi-field tuple variants** (e.g., `Rectangle(f64, f64)`): a tuple of the fields
/// - **Struct variants** (e.g., `Click { x: i32, y: i32 }`): a tuple of the
///   fields in declaration order
///
/// `get_option` clones the fields, so every field type must be `Clone`.
///
/// # Example
///
/// ```rust,ignore
/// use focal::Prisms;
/// use focal::optics::Prism;
///
/// #[derive(Clone, Debug, PartialEq, Prisms)]
/// enum Event {
///     Click { x: i32, y: i32 },
///     KeyPress(char),
///     Close,
/// }
///
/// assert_eq!(Event::click_prism().reverse_get((1, 2)), Event::Click { x: 1, y: 2 });
/// assert_eq!(Event::key_press_prism().get_option(&Event::Close), None);
/// assert!(Event::close_prism().is_match(&Event::Close));
/// ```
#[proc_macro_derive(Prisms)]
pub fn derive_prisms(input: TokenStream) -> TokenStream {
    prisms::derive_prisms_impl(input)
}
