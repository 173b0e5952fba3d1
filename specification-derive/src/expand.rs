use std::collections::HashMap;

use ebml_stream_specification::ElementType;
use itertools::Itertools;
use proc_macro2::{Span, TokenStream};
use quote::{quote, quote_spanned};
use syn::spanned::Spanned;
use syn::{Error, Ident, Result, Token, Visibility};

use crate::ast::{ElementDef, SchemaDef};

struct Resolved<'a> {
    def: &'a ElementDef,
    id: u32,
    name: String,
    element_type: ElementType,
    level: Option<u8>,
}

fn resolve(def: &ElementDef) -> Result<Resolved<'_>> {
    Ok(Resolved {
        def,
        id: def.id()?,
        name: def.name()?,
        element_type: def.element_type()?,
        level: def.level()?,
    })
}

fn combine(errors: impl Iterator<Item = Error>) -> Result<()> {
    match errors.reduce(|mut a, b| {
        a.combine(b);
        a
    }) {
        Some(err) => Err(err),
        None => Ok(()),
    }
}

fn check_duplicates(elements: &[Resolved]) -> Result<()> {
    let ids = elements
        .iter()
        .duplicates_by(|el| el.id)
        .map(|el| Error::new_spanned(&el.def.id, format!("duplicate id {:#x} detected", el.id)));
    let names = elements
        .iter()
        .duplicates_by(|el| el.name.clone())
        .map(|el| Error::new(el.def.ident().span(), format!("duplicate name \"{}\" detected", el.name)));
    combine(ids.chain(names))
}

fn check_hierarchy(elements: &[Resolved]) -> Result<()> {
    let by_ident: HashMap<&Ident, &Resolved> = elements.iter().map(|el| (el.def.ident(), el)).collect();

    combine(elements.iter().filter_map(|el| {
        let parent_ident = el.def.parent()?;
        let parent = match by_ident.get(parent_ident) {
            Some(parent) => parent,
            None => return Some(Error::new(parent_ident.span(), format!("unknown parent `{}`", parent_ident))),
        };
        if !parent.element_type.is_master() {
            return Some(Error::new(parent_ident.span(), "Parents must be of Master type"));
        }
        if !parent.def.path.iter().eq(el.def.ancestors()) {
            return Some(Error::new(
                el.def.path.span(),
                format!("path does not match the declared path of `{}`", parent_ident),
            ));
        }
        None
    }))
}

pub fn expand(input: SchemaDef) -> Result<TokenStream> {
    let SchemaDef {
        attrs,
        visibility,
        struct_token,
        ident,
        elements,
    } = input;

    let resolved: Vec<Resolved> = elements.iter().map(resolve).collect::<Result<_>>()?;
    check_duplicates(&resolved)?;
    check_hierarchy(&resolved)?;

    let specs = spanned_ebml_stream_specs(&visibility, &struct_token);
    let element_info = quote!(#specs ElementInfo);
    let schema_trait = quote!(#specs Schema);

    let infos = resolved.iter().map(|el| {
        let id = el.id;
        let name = &el.name;
        let ty = Ident::new(&format!("{:?}", el.element_type), Span::call_site());
        let level = match el.level {
            Some(level) => quote!(::core::option::Option::Some(#level)),
            None => quote!(::core::option::Option::None),
        };

        quote! {
            #element_info {
                id: #id,
                name: #name,
                element_type: ::core::option::Option::Some(#specs ElementType::#ty),
                level: #level,
            }
        }
    });

    let get_element = resolved.iter().enumerate().map(|(index, el)| {
        let id = el.id;
        quote! {
            #id => ::core::option::Option::Some(Self::ELEMENTS[#index]),
        }
    });

    let name_to_id = resolved.iter().map(|el| {
        let id = el.id;
        let name = &el.name;
        quote! {
            #name => ::core::option::Option::Some(#id),
        }
    });

    Ok(quote! {
        #(#attrs)*
        #visibility struct #ident;

        impl #ident {
            /// Every element declared in this schema, in declaration order.
            pub const ELEMENTS: &'static [#element_info] = &[#(#infos),*];
        }

        impl #schema_trait for #ident {
            fn get_element(&self, id: u32) -> ::core::option::Option<#element_info> {
                match id {
                    #(#get_element)*
                    _ => ::core::option::Option::None,
                }
            }

            fn name_to_id(&self, name: &str) -> ::core::option::Option<u32> {
                match name {
                    #(#name_to_id)*
                    _ => ::core::option::Option::None,
                }
            }
        }
    })
}

fn spanned_ebml_stream_specs(visibility: &Visibility, struct_token: &Token![struct]) -> TokenStream {
    let vis_span = match visibility {
        Visibility::Public(vis) => Some(vis.pub_token.span()),
        Visibility::Crate(vis) => Some(vis.crate_token.span()),
        Visibility::Restricted(vis) => Some(vis.pub_token.span()),
        Visibility::Inherited => None,
    };
    let first_span = vis_span.unwrap_or(struct_token.span);
    quote_spanned!(first_span=> ebml_stream::specs::)
}
