use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, Data, DeriveInput, Fields, Type};

const INTEGER_TYPES: &[&str] = &["i8", "i16", "i32", "i64", "i128", "isize"];

/// Derive macro that generates whole-unit arithmetic for a newtype over a
/// signed integer, e.g. `struct Money(i64)` holding cents.
///
/// Generates:
/// - `Add`, `Sub` and `Neg` producing `Self`
/// - `AddAssign` and `SubAssign`
/// - `Mul<i64>`, scaling the wrapped integer
/// - `Sum` over owned and borrowed values
/// - inherent `checked_add`, `checked_sub` and `checked_mul`, returning `None`
///   on overflow
#[proc_macro_derive(CentsArithmetic)]
pub fn derive_cents_arithmetic(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let name = &input.ident;

    let inner = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Unnamed(fields) if fields.unnamed.len() == 1 => &fields.unnamed[0].ty,
            _ => panic!("CentsArithmetic only supports tuple structs with a single field"),
        },
        _ => panic!("CentsArithmetic only supports structs"),
    };

    if !is_signed_integer(inner) {
        panic!("CentsArithmetic requires the wrapped field to be a signed integer");
    }

    let expanded = quote! {
        impl #name {
            /// Addition that returns `None` on overflow.
            pub fn checked_add(self, rhs: #name) -> ::std::option::Option<#name> {
                self.0.checked_add(rhs.0).map(#name)
            }

            /// Subtraction that returns `None` on overflow.
            pub fn checked_sub(self, rhs: #name) -> ::std::option::Option<#name> {
                self.0.checked_sub(rhs.0).map(#name)
            }

            /// Scaling that returns `None` on overflow.
            pub fn checked_mul(self, rhs: i64) -> ::std::option::Option<#name> {
                <#inner as ::std::convert::TryFrom<i64>>::try_from(rhs)
                    .ok()
                    .and_then(|rhs| self.0.checked_mul(rhs))
                    .map(#name)
            }
        }

        impl ::std::ops::Add for #name {
            type Output = #name;

            fn add(self, rhs: #name) -> #name {
                #name(self.0 + rhs.0)
            }
        }

        impl ::std::ops::Sub for #name {
            type Output = #name;

            fn sub(self, rhs: #name) -> #name {
                #name(self.0 - rhs.0)
            }
        }

        impl ::std::ops::Neg for #name {
            type Output = #name;

            fn neg(self) -> #name {
                #name(-self.0)
            }
        }

        impl ::std::ops::AddAssign for #name {
            fn add_assign(&mut self, rhs: #name) {
                self.0 += rhs.0;
            }
        }

        impl ::std::ops::SubAssign for #name {
            fn sub_assign(&mut self, rhs: #name) {
                self.0 -= rhs.0;
            }
        }

        impl ::std::ops::Mul<i64> for #name {
            type Output = #name;

            fn mul(self, rhs: i64) -> #name {
                #name(self.0 * (rhs as #inner))
            }
        }

        impl ::std::iter::Sum for #name {
            fn sum<I: ::std::iter::Iterator<Item = #name>>(iter: I) -> #name {
                iter.fold(#name(0), |acc, x| acc + x)
            }
        }

        impl<'a> ::std::iter::Sum<&'a #name> for #name {
            fn sum<I: ::std::iter::Iterator<Item = &'a #name>>(iter: I) -> #name {
                iter.fold(#name(0), |acc, x| acc + *x)
            }
        }
    };

    TokenStream::from(expanded)
}

fn is_signed_integer(ty: &Type) -> bool {
    if let Type::Path(type_path) = ty {
        if let Some(segment) = type_path.path.segments.last() {
            return INTEGER_TYPES.iter().any(|t| segment.ident == *t);
        }
    }
    false
}
