use ebml_stream_specification::ElementType;
use syn::parse::{Parse, ParseBuffer, ParseStream};
use syn::punctuated::Punctuated;
use syn::spanned::Spanned;
use syn::{Attribute, Error, Ident, Lit, LitInt, Meta, Result, Token, Visibility};

pub struct SchemaDef {
    pub attrs: Vec<Attribute>,
    pub visibility: Visibility,
    pub struct_token: Token![struct],
    pub ident: Ident,
    pub elements: Punctuated<ElementDef, Token![,]>,
}

impl Parse for SchemaDef {
    fn parse(input: ParseStream) -> Result<Self> {
        let attrs = input.call(Attribute::parse_outer)?;
        let visibility: Visibility = input.parse()?;
        let struct_token = input.parse::<Token![struct]>()?;
        let ident = input.parse::<Ident>()?;
        let content: ParseBuffer;
        syn::braced!(content in input);
        let elements = content.parse_terminated(ElementDef::parse)?;
        Ok(Self {
            attrs,
            visibility,
            struct_token,
            ident,
            elements,
        })
    }
}

///
/// One `Path/To/Name: Type = id` line of the macro input.
///
pub struct ElementDef {
    pub attrs: Vec<Attribute>,
    pub path: Punctuated<Ident, Token![/]>,
    pub ty: Ident,
    pub id: LitInt,
}

impl ElementDef {
    pub fn ident(&self) -> &Ident {
        // parse_separated_nonempty guarantees at least one segment
        &self.path[self.path.len() - 1]
    }

    pub fn parent(&self) -> Option<&Ident> {
        self.path.iter().rev().nth(1)
    }

    pub fn ancestors(&self) -> impl Iterator<Item = &Ident> {
        self.path.iter().take(self.path.len() - 1)
    }

    pub fn is_global(&self) -> bool {
        self.attrs.iter().any(|attr| attr.path.is_ident("global"))
    }

    pub fn level(&self) -> Result<Option<u8>> {
        if self.is_global() {
            if self.path.len() > 1 {
                return Err(Error::new(self.path.span(), "#[global] elements cannot declare a path"));
            }
            return Ok(None);
        }
        u8::try_from(self.path.len() - 1)
            .map(Some)
            .map_err(|_| Error::new(self.path.span(), "element path is too deep"))
    }

    pub fn name(&self) -> Result<String> {
        for attr in &self.attrs {
            if !attr.path.is_ident("name") {
                continue;
            }
            return match attr.parse_meta()? {
                Meta::NameValue(value) => match value.lit {
                    Lit::Str(name) => Ok(name.value()),
                    other => Err(Error::new_spanned(other, "#[name] expects a string literal")),
                },
                other => Err(Error::new_spanned(other, "expected #[name = \"...\"]")),
            };
        }
        Ok(self.ident().to_string())
    }

    pub fn id(&self) -> Result<u32> {
        self.id.base10_parse::<u32>()
    }

    pub fn element_type(&self) -> Result<ElementType> {
        match self.ty.to_string().as_str() {
            "Master" => Ok(ElementType::Master),
            "UnsignedInt" => Ok(ElementType::UnsignedInt),
            "Integer" => Ok(ElementType::Integer),
            "Float" => Ok(ElementType::Float),
            "String" => Ok(ElementType::String),
            "Utf8" => Ok(ElementType::Utf8),
            "Date" => Ok(ElementType::Date),
            "Binary" => Ok(ElementType::Binary),
            other => Err(Error::new_spanned(&self.ty, format!("unknown element type \"{}\"", other))),
        }
    }
}

impl Parse for ElementDef {
    fn parse(input: ParseStream) -> Result<Self> {
        let attrs = input.call(Attribute::parse_outer)?;
        let path = Punctuated::parse_separated_nonempty(input)?;
        input.parse::<Token![:]>()?;
        let ty: Ident = input.parse()?;
        input.parse::<Token![=]>()?;
        let id: LitInt = input.parse()?;
        Ok(Self { attrs, path, ty, id })
    }
}
