use fxhash::FxHashMap;
use heck::ToSnakeCase;
use proc_macro2::{Span, TokenStream};
use quote::{ToTokens, format_ident, quote};
use syn::parse::Parser;
use syn::{Expr, ExprLit, ExprUnary, Ident, ImplItem, ImplItemConst, ItemImpl, Lit, LitFloat, LitStr};
use syn::{Meta, Path, Type, UnOp, Visibility};

const ATTR: &str = "enumeration";

/// Parsed `#[enumeration(...)]` arguments.
struct Args {
    id: Option<LitStr>,
    krate: Path,
    accessors: bool,
}

impl Default for Args {
    fn default() -> Self {
        Self { id: None, krate: syn::parse_quote!(::ordum), accessors: true }
    }
}

/// A declared constant that becomes an enumerator.
struct Member {
    ident: Ident,
    vis: Visibility,
    ty: Type,
    expr: Expr,
}

/// Literal values the macro can compare at compile time. Mirrors the strict
/// equality of `Scalar`: `1`, `1.0` and `"1"` are different keys.
#[derive(PartialEq, Eq, Hash)]
enum LiteralKey {
    Bool(bool),
    Int(i128),
    Float(u64),
    Str(String),
}

pub fn expand_enumeration(args: TokenStream, mut input: ItemImpl) -> TokenStream {
    let args = match parse_args(args) {
        Ok(args) => args,
        Err(err) => return err.to_compile_error(),
    };

    if input.trait_.is_some() {
        return syn::Error::new_spanned(&input.self_ty, "enumeration expects an inherent impl block")
            .to_compile_error();
    }
    if !input.generics.params.is_empty() {
        return syn::Error::new_spanned(&input.generics, "generic enumerations are not supported")
            .to_compile_error();
    }
    let Some(type_ident) = type_ident(&input.self_ty).cloned() else {
        return syn::Error::new_spanned(&input.self_ty, "enumeration expects a named type")
            .to_compile_error();
    };

    let members = match collect_members(&mut input) {
        Ok(members) => members,
        Err(err) => return err.to_compile_error(),
    };
    if let Some(err) = duplicate_literals(&members) {
        return err.to_compile_error();
    }

    let self_ty = &input.self_ty;
    let krate = &args.krate;
    let type_id = args.id.as_ref().map_or_else(
        || quote! { concat!(module_path!(), "::", stringify!(#type_ident)) },
        ToTokens::to_token_stream,
    );

    let declarations = members.iter().map(|m| {
        let ident = &m.ident;
        let name = ident.to_string();
        quote! { #krate::Declaration::new(#name, Self::#ident) }
    });

    let accessors = if args.accessors {
        let fns = members.iter().map(|m| accessor(krate, m));
        quote! {
            #[automatically_derived]
            impl #self_ty {
                #(#fns)*
            }
        }
    } else {
        quote! {}
    };

    quote! {
        #input

        #[automatically_derived]
        impl #krate::Enumeration for #self_ty {
            const TYPE_ID: &'static str = #type_id;

            fn declarations() -> ::std::vec::Vec<#krate::Declaration> {
                ::std::vec![#(#declarations),*]
            }
        }

        #accessors
    }
}

fn parse_args(args: TokenStream) -> syn::Result<Args> {
    let mut parsed = Args::default();
    let metas = syn::punctuated::Punctuated::<Meta, syn::Token![,]>::parse_terminated.parse2(args)?;

    for meta in metas {
        let Meta::NameValue(nv) = &meta else {
            return Err(syn::Error::new_spanned(
                meta,
                "expected `id = \"...\"`, `crate = \"...\"` or `accessors = bool`",
            ));
        };
        let Expr::Lit(ExprLit { lit, .. }) = &nv.value else {
            return Err(syn::Error::new_spanned(&nv.value, "expected a literal"));
        };

        match lit {
            Lit::Str(s) if nv.path.is_ident("id") => parsed.id = Some(s.clone()),
            Lit::Str(s) if nv.path.is_ident("crate") => parsed.krate = s.parse()?,
            Lit::Bool(b) if nv.path.is_ident("accessors") => parsed.accessors = b.value,
            _ => {
                return Err(syn::Error::new_spanned(
                    nv,
                    "unsupported enumeration argument; expected `id = \"...\"`, \
                     `crate = \"...\"` or `accessors = bool`",
                ));
            },
        }
    }

    Ok(parsed)
}

fn type_ident(ty: &Type) -> Option<&Ident> {
    let Type::Path(path) = ty else { return None };
    if path.qself.is_some() {
        return None;
    }
    path.path.segments.last().map(|segment| &segment.ident)
}

/// Collects the impl block's constants in order and strips the
/// `#[enumeration(skip)]` markers so they do not reach the compiler.
fn collect_members(input: &mut ItemImpl) -> syn::Result<Vec<Member>> {
    let mut members = Vec::new();

    for item in &mut input.items {
        let ImplItem::Const(constant) = item else { continue };
        if take_skip_marker(constant)? {
            continue;
        }
        members.push(Member {
            ident: constant.ident.clone(),
            vis: constant.vis.clone(),
            ty: constant.ty.clone(),
            expr: constant.expr.clone(),
        });
    }

    Ok(members)
}

fn take_skip_marker(constant: &mut ImplItemConst) -> syn::Result<bool> {
    let mut skip = false;
    let mut error = None;

    constant.attrs.retain(|attr| {
        if !attr.path().is_ident(ATTR) {
            return true;
        }
        if let Err(err) = attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("skip") {
                skip = true;
                Ok(())
            } else {
                Err(meta.error("only `#[enumeration(skip)]` is supported on constants"))
            }
        }) {
            error = Some(err);
        }
        false
    });

    error.map_or(Ok(skip), Err)
}

/// `single` keys float literals at `f32` precision, the way `Scalar::from(f32)` widens them.
fn literal_key(expr: &Expr, single: bool) -> Option<LiteralKey> {
    match expr {
        Expr::Lit(ExprLit { lit, .. }) => match lit {
            Lit::Bool(b) => Some(LiteralKey::Bool(b.value)),
            Lit::Int(i) => i.base10_parse::<i128>().ok().map(LiteralKey::Int),
            Lit::Float(f) => float_key(f, single),
            Lit::Str(s) => Some(LiteralKey::Str(s.value())),
            _ => None,
        },
        Expr::Unary(ExprUnary { op: UnOp::Neg(_), expr, .. }) => match literal_key(expr, single)? {
            LiteralKey::Int(i) => Some(LiteralKey::Int(-i)),
            LiteralKey::Float(bits) => Some(LiteralKey::Float((-f64::from_bits(bits)).to_bits())),
            _ => None,
        },
        Expr::Group(group) => literal_key(&group.expr, single),
        Expr::Paren(paren) => literal_key(&paren.expr, single),
        _ => None,
    }
}

fn float_key(lit: &LitFloat, single: bool) -> Option<LiteralKey> {
    let value = if single || lit.suffix() == "f32" {
        f64::from(lit.base10_parse::<f32>().ok()?)
    } else {
        lit.base10_parse::<f64>().ok()?
    };
    Some(LiteralKey::Float(value.to_bits()))
}

fn is_f32(ty: &Type) -> bool {
    match ty {
        Type::Path(path) => path.qself.is_none() && path.path.is_ident("f32"),
        Type::Group(group) => is_f32(&group.elem),
        Type::Paren(paren) => is_f32(&paren.elem),
        _ => false,
    }
}

/// Rejects constants whose literal values collide. Computed values are left
/// to the registry's build-time validation.
fn duplicate_literals(members: &[Member]) -> Option<syn::Error> {
    let mut seen: FxHashMap<LiteralKey, &Ident> = FxHashMap::default();
    let mut errors: Option<syn::Error> = None;

    for member in members {
        let Some(key) = literal_key(&member.expr, is_f32(&member.ty)) else { continue };
        if let Some(first) = seen.get(&key) {
            let err = syn::Error::new_spanned(
                &member.expr,
                format!(
                    "ambiguous enumerator value: `{}` has the same value as `{first}`",
                    member.ident
                ),
            );
            match &mut errors {
                Some(existing) => existing.combine(err),
                None => errors = Some(err),
            }
        } else {
            seen.insert(key, &member.ident);
        }
    }

    errors
}

fn accessor_ident(member: &Ident) -> Ident {
    let snake = member.to_string().to_snake_case();
    if syn::parse_str::<Ident>(&snake).is_ok() {
        return Ident::new(&snake, member.span());
    }
    match snake.as_str() {
        "self" | "super" | "crate" | "_" => format_ident!("{snake}_"),
        _ => Ident::new_raw(&snake, Span::call_site()),
    }
}

fn accessor(krate: &Path, member: &Member) -> TokenStream {
    let vis = &member.vis;
    let name = member.ident.to_string();
    let fn_ident = accessor_ident(&member.ident);
    let doc = format!("Returns the `{name}` enumerator from the global registry.");

    quote! {
        #[doc = #doc]
        ///
        /// # Errors
        /// Returns the registry's configuration error if the declarations are ambiguous.
        #vis fn #fn_ident() -> ::std::result::Result<
            ::std::sync::Arc<#krate::Enumerator>,
            #krate::RegistryError,
        > {
            <Self as #krate::EnumerationExt>::for_name(#name)
        }
    }
}
