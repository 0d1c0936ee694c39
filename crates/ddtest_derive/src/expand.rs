//! Token-level expansion of `#[data_driven]`, kept on `proc_macro2` so it can be unit tested.

use proc_macro2::TokenStream;
use quote::quote;
use syn::punctuated::Punctuated;
use syn::spanned::Spanned;
use syn::{Attribute, Block, Expr, ItemFn, Token, parse_quote};

/// Name of the annotation that carries one declared tuple.
const CASE_ATTR: &str = "case";

pub(crate) fn data_driven(attr: TokenStream, item: TokenStream) -> syn::Result<TokenStream> {
    if !attr.is_empty() {
        return Err(syn::Error::new(
            attr.span(),
            "`#[data_driven]` takes no arguments; declare cases with `#[case(...)]`",
        ));
    }

    let mut func: ItemFn = syn::parse2(item)?;
    if let Some(asyncness) = &func.sig.asyncness {
        return Err(syn::Error::new_spanned(
            asyncness,
            "`#[data_driven]` cannot be used on `async fn`: declared cases are resolved on the calling thread",
        ));
    }

    let (case_attrs, kept): (Vec<Attribute>, Vec<Attribute>) = func
        .attrs
        .drain(..)
        .partition(|attr| attr.path().is_ident(CASE_ATTR));
    func.attrs = kept;

    if case_attrs.is_empty() {
        return Err(syn::Error::new_spanned(
            &func.sig.ident,
            "`#[data_driven]` requires at least one `#[case(...)]` below it",
        ));
    }

    let cases = case_attrs.iter().map(parse_case).collect::<syn::Result<Vec<_>>>()?;
    let case_exprs = cases.iter().map(|args| {
        let args = args.iter();
        quote! {
            ::ddtest::TestCase::new(::std::vec::Vec::from([#(::ddtest::IntoArg::into_arg(#args)),*]))
        }
    });

    let name = func.sig.ident.to_string();
    let body = &func.block;
    let block: Block = parse_quote! {{
        fn __ddtest_declared_cases() -> ::std::vec::Vec<::ddtest::TestCase> {
            ::std::vec::Vec::from([#(#case_exprs),*])
        }
        static __DDTEST_CASE_SOURCE: ::ddtest::resolver::CaseSource = ::ddtest::resolver::CaseSource::new(
            ::core::module_path!(),
            #name,
            ::core::file!(),
            ::core::line!(),
            __ddtest_declared_cases,
        );
        let __ddtest_frame = ::ddtest::resolver::enter(&__DDTEST_CASE_SOURCE);
        #body
    }};
    *func.block = block;

    Ok(quote!(#func))
}

/// Parse `#[case(a, b, ...)]` into its value expressions. `#[case()]` is a zero-arity case.
fn parse_case(attr: &Attribute) -> syn::Result<Punctuated<Expr, Token![,]>> {
    attr.parse_args_with(Punctuated::<Expr, Token![,]>::parse_terminated)
}
