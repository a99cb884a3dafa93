//! Base64 text forms shared by all entities.

/// Implements `Display`, `FromStr` and the string conversions serde uses for
/// a type with `to_bytes()` and `from_bytes()`.
///
/// Text is decoded in two steps: malformed base64 fails before any length or
/// suite check runs.
macro_rules! impl_base64_text {
    ($ty:ident) => {
        impl ::std::fmt::Display for $ty {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(&$crate::codec::to_base64(&self.to_bytes()))
            }
        }

        impl ::std::str::FromStr for $ty {
            type Err = $crate::error::KeyError;

            fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
                $crate::codec::from_base64(s)
                    .and_then(|bytes| Self::from_bytes(&bytes))
                    .map_err(|e| {
                        ::tracing::warn!(entity = stringify!($ty), "rejected text form: {}", e);
                        e
                    })
            }
        }

        impl ::std::convert::TryFrom<String> for $ty {
            type Error = $crate::error::KeyError;

            fn try_from(s: String) -> ::std::result::Result<Self, Self::Error> {
                s.parse()
            }
        }

        impl ::std::convert::From<$ty> for String {
            fn from(value: $ty) -> String {
                value.to_string()
            }
        }
    };
}

pub(crate) use impl_base64_text;
