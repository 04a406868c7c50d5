use proc_macro2::TokenStream;
use quote::quote;
use syn::{Data, DeriveInput, Fields, LitStr};

/// Collected field attributes: `#[tag(...)]` pairs and the embedded flag.
struct FieldAttrs {
    embedded: bool,
    tags: Vec<(String, String)>,
}

impl FieldAttrs {
    fn parse(field: &syn::Field) -> syn::Result<Self> {
        let mut attrs = Self {
            embedded: false,
            tags: Vec::new(),
        };
        for attr in &field.attrs {
            if attr.path().is_ident("tag") {
                attr.parse_nested_meta(|meta| {
                    let name = meta
                        .path
                        .get_ident()
                        .ok_or_else(|| meta.error("expected `name = \"value\"`"))?
                        .to_string();
                    let value: LitStr = meta.value()?.parse()?;
                    attrs.tags.push((name, value.value()));
                    Ok(())
                })?;
            } else if attr.path().is_ident("record") {
                attr.parse_nested_meta(|meta| {
                    if meta.path.is_ident("embedded") {
                        attrs.embedded = true;
                        Ok(())
                    } else {
                        Err(meta.error("unknown `record` attribute"))
                    }
                })?;
            }
        }
        Ok(attrs)
    }
}

pub(crate) fn expand(input: &DeriveInput) -> syn::Result<TokenStream> {
    if !input.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &input.generics,
            "generic records are not supported",
        ));
    }
    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(named) => &named.named,
            _ => {
                return Err(syn::Error::new_spanned(
                    &input.ident,
                    "`Record` requires named fields",
                ));
            }
        },
        _ => {
            return Err(syn::Error::new_spanned(
                &input.ident,
                "`Record` can only be derived for structs",
            ));
        }
    };

    let mut infos = Vec::new();
    let mut idents = Vec::new();
    let mut names = Vec::new();
    for field in fields {
        let attrs = FieldAttrs::parse(field)?;
        let ident = field.ident.clone().expect("named fields only");
        let name = ident.to_string();

        let mut info = quote! { tagmap::info::FieldInfo::new(#name) };
        if attrs.embedded {
            info = quote! { #info.embedded() };
        }
        if !attrs.tags.is_empty() {
            let pairs = attrs.tags.iter().map(|(n, v)| quote! { (#n, #v) });
            info = quote! { #info.with_tags(&[#(#pairs),*]) };
        }

        infos.push(info);
        idents.push(ident);
        names.push(name);
    }
    let indices = (0..idents.len()).collect::<Vec<usize>>();

    let ident = &input.ident;
    let record_name = ident.to_string();

    Ok(quote! {
        impl tagmap::info::Described for #ident {
            fn record_info() -> &'static tagmap::info::RecordInfo {
                static CELL: ::std::sync::OnceLock<tagmap::info::RecordInfo> =
                    ::std::sync::OnceLock::new();
                CELL.get_or_init(|| {
                    tagmap::info::RecordInfo::new(#record_name, ::std::vec![#(#infos),*])
                })
            }
        }

        impl tagmap::Record for #ident {
            fn info(&self) -> &'static tagmap::info::RecordInfo {
                <Self as tagmap::info::Described>::record_info()
            }

            fn field(&self, name: &str) -> ::core::option::Option<&dyn tagmap::Field> {
                match name {
                    #(#names => ::core::option::Option::Some(&self.#idents),)*
                    _ => ::core::option::Option::None,
                }
            }

            fn field_mut(
                &mut self,
                name: &str,
            ) -> ::core::option::Option<&mut dyn tagmap::Field> {
                match name {
                    #(#names => ::core::option::Option::Some(&mut self.#idents),)*
                    _ => ::core::option::Option::None,
                }
            }

            fn field_at(&self, index: usize) -> ::core::option::Option<&dyn tagmap::Field> {
                match index {
                    #(#indices => ::core::option::Option::Some(&self.#idents),)*
                    _ => ::core::option::Option::None,
                }
            }

            fn field_at_mut(
                &mut self,
                index: usize,
            ) -> ::core::option::Option<&mut dyn tagmap::Field> {
                match index {
                    #(#indices => ::core::option::Option::Some(&mut self.#idents),)*
                    _ => ::core::option::Option::None,
                }
            }
        }

        impl tagmap::Field for #ident {
            #[inline]
            fn kind(&self) -> tagmap::FieldRef<'_> {
                tagmap::FieldRef::Record(self)
            }

            #[inline]
            fn kind_mut(&mut self) -> tagmap::FieldMut<'_> {
                tagmap::FieldMut::Record(self)
            }
        }
    })
}
