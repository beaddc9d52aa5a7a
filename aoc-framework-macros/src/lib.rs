//! Procedural macros for the `aoc-framework` crate.

use proc_macro::TokenStream;
use proc_macro2::Span;
use quote::quote;
use syn::meta::ParseNestedMeta;
use syn::{Error, Expr, Item, ItemImpl, ItemStruct, Result, Type, parse_macro_input};

/// Procedural macro attribute that generates a `SolutionRunner` implementation.
///
/// The generated `run` parses the input (when a `parsed` type is given) and then solves both
/// parts, reporting every step to the output handler.
///
/// # Properties
///
/// - `name` (required): An expression that evaluates to `&str`, the solution's display name.
///   Can be a string literal or a constant.
///
/// - `part_one` (required): The type implementing `Solution<PartOne>`.
///
/// - `part_two` (required): The type implementing `Solution<PartTwo>`.
///
/// - `parsed` (optional): A type that implements `ParseData`, used to parse input once before
///   solving. If omitted, the unparsed input string is passed directly to both parts.
///
/// # Errors
///
/// Returns a compile error if:
/// - Applied to anything other than a struct or impl block
/// - A required property is missing
/// - Any property is specified more than once
/// - An unsupported property is provided
///
/// # Examples
///
/// With a struct `Day10` implementing `Solution<PartOne>` & `Solution<PartTwo>` over `str`:
///
/// ```ignore
/// #[solution_runner(name = "Day 10", part_one = Day10, part_two = Day10)]
/// struct Day10Runner;
/// ```
///
/// With a struct `Instructions` implementing `ParseData`, and a solutions collection struct
/// `AdventOfCode2015<const DAY: u8>`:
///
/// ```ignore
/// const NAME06: &str = "Day 6";
/// #[solution_runner(name = NAME06, parsed = Instructions, part_one = Day06, part_two = Day06)]
/// impl AdventOfCode2015<6> {}
/// ```
#[proc_macro_attribute]
pub fn solution_runner(args: TokenStream, input: TokenStream) -> TokenStream {
    let mut properties = RunnerProperties::default();
    let properties_parser = syn::meta::parser(|meta| properties.parse(&meta));
    parse_macro_input!(args with properties_parser);

    let solve_call = match properties.solve_call() {
        Ok(tokens) => tokens,
        Err(error) => return error.to_compile_error().into(),
    };

    let original_input = proc_macro2::TokenStream::from(input.clone());
    let runner_ty = match parse_macro_input!(input as Item) {
        // a struct is named by its ident
        Item::Struct(ItemStruct { ident, .. }) => quote! { #ident },
        // an impl block is implemented for its self type
        Item::Impl(ItemImpl { self_ty, .. }) => quote! { #self_ty },
        _ => {
            return Error::new(
                Span::call_site(),
                "the #[solution_runner] macro can only be applied to a struct or an impl block",
            )
            .to_compile_error()
            .into();
        }
    };

    TokenStream::from(quote! {
        #original_input

        impl aoc_framework::runner::SolutionRunner for #runner_ty {
            fn run(
                input: &str,
                handler: &mut dyn aoc_framework::runner::OutputHandler,
                timed: bool
            ) -> aoc_framework::DynamicResult<()> {
                #solve_call
            }
        }
    })
}

/// Properties collected from the attribute's arguments.
#[derive(Default)]
struct RunnerProperties {
    /// The expression to use as a solution name; should resolve to string slice.
    name: Option<Expr>,
    /// The type to use for a `ParseData` generic parameter.
    parsed: Option<Type>,
    /// The type to use for a `Solution<PartOne>` generic parameter.
    part_one: Option<Type>,
    /// The type to use for a `Solution<PartTwo>` generic parameter.
    part_two: Option<Type>,
}

/// Store a property's value, failing if it was already given.
fn set_once<T: syn::parse::Parse>(
    slot: &mut Option<T>,
    meta: &ParseNestedMeta,
    key: &str,
) -> Result<()> {
    if slot.is_some() {
        return Err(meta.error(format!("duplicate '{key}' property")));
    }
    *slot = Some(meta.value()?.parse()?);
    Ok(())
}

/// Take a required property's value, failing with a call site error if it is missing.
fn required<T>(slot: Option<T>, key: &str) -> Result<T> {
    slot.ok_or_else(|| {
        Error::new(
            Span::call_site(),
            format!("missing required property: '{key}'"),
        )
    })
}

impl RunnerProperties {
    fn parse(&mut self, meta: &ParseNestedMeta) -> Result<()> {
        if meta.path.is_ident("name") {
            set_once(&mut self.name, meta, "name")
        } else if meta.path.is_ident("parsed") {
            set_once(&mut self.parsed, meta, "parsed")
        } else if meta.path.is_ident("part_one") {
            set_once(&mut self.part_one, meta, "part_one")
        } else if meta.path.is_ident("part_two") {
            set_once(&mut self.part_two, meta, "part_two")
        } else {
            Err(meta.error("unsupported solution runner property"))
        }
    }

    /// Build the call to the framework's solve function matching the properties.
    fn solve_call(self) -> Result<proc_macro2::TokenStream> {
        let name = required(self.name, "name")?;
        let part_one = required(self.part_one, "part_one")?;
        let part_two = required(self.part_two, "part_two")?;

        Ok(match self.parsed {
            None => quote! {
                aoc_framework::runner::solve_solution::<#part_one, #part_two>(
                    #name,
                    input,
                    handler,
                    timed
                )
            },
            Some(parsed) => quote! {
                aoc_framework::runner::solve_parsed_solution::<#parsed, #part_one, #part_two>(
                    #name,
                    input,
                    handler,
                    timed
                )
            },
        })
    }
}
