/// Declare a string-backed enum that tolerates unknown values.
///
/// Every listed variant maps to its wire string. Anything else deserializes
/// into `Unknown(String)` and serializes back unchanged, so values added to the
/// API later still round-trip.
///
/// ```ignore
/// string_enum! {
///     /// Job status.
///     pub enum JobStatus {
///         Open => "OPEN",
///         Closed => "CLOSED",
///     }
/// }
/// ```
macro_rules! string_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $value:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        $vis enum $name {
            $( $(#[$vmeta])* $variant, )+
            /// A value this client does not know about.
            Unknown(String),
        }

        impl $name {
            /// Every known variant, in declaration order.
            pub const KNOWN: &'static [$name] = &[ $( $name::$variant ),+ ];

            /// The wire representation.
            #[must_use]
            pub fn as_str(&self) -> &str {
                match self {
                    $( $name::$variant => $value, )+
                    $name::Unknown(value) => value.as_str(),
                }
            }

            /// Whether this value is one of the declared variants.
            #[must_use]
            pub fn is_known(&self) -> bool {
                !matches!(self, $name::Unknown(_))
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                match value {
                    $( $value => $name::$variant, )+
                    other => $name::Unknown(other.to_string()),
                }
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                $name::from(value.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = std::convert::Infallible;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok($name::from(s))
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                self.as_str()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let value = String::deserialize(deserializer)?;
                Ok($name::from(value))
            }
        }
    };
}

/// Implement [`crate::model::Model`] for structs carrying the standard
/// `id`, `remote_id` and `additional_properties` fields.
///
/// Models are listable unless declared with `@retrieve_only`.
macro_rules! impl_model {
    (@retrieve_only $($model:ty),+ $(,)?) => {
        $(
            impl $crate::model::Model for $model {
                fn id(&self) -> Option<&str> {
                    self.id.as_deref()
                }

                fn remote_id(&self) -> Option<&str> {
                    self.remote_id.as_deref()
                }

                fn additional_properties(&self) -> &serde_json::Map<String, serde_json::Value> {
                    &self.additional_properties
                }
            }
        )+
    };
    ($($model:ty),+ $(,)?) => {
        impl_model!(@retrieve_only $($model),+);
        $( impl $crate::model::Listable for $model {} )+
    };
}

/// Declare a resource model with the fields every common model shares.
///
/// Adds `id`, `remote_id`, `created_at` and `modified_at` before the listed
/// fields, and `remote_was_deleted`, `field_mappings`, `remote_data` and the
/// flattened `additional_properties` bag after them.
macro_rules! common_model {
    (
        $(#[$meta:meta])*
        pub struct $name:ident {
            $( $(#[$fmeta:meta])* pub $field:ident : $ty:ty ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
        pub struct $name {
            #[serde(default)]
            pub id: Option<String>,
            /// Identifier in the third-party system.
            #[serde(default)]
            pub remote_id: Option<String>,
            #[serde(default)]
            pub created_at: Option<chrono::DateTime<chrono::Utc>>,
            #[serde(default)]
            pub modified_at: Option<chrono::DateTime<chrono::Utc>>,
            $( $(#[$fmeta])* pub $field: $ty, )*
            /// Whether the record was deleted in the third-party system.
            #[serde(default)]
            pub remote_was_deleted: Option<bool>,
            #[serde(default)]
            pub field_mappings: Option<serde_json::Map<String, serde_json::Value>>,
            #[serde(default, deserialize_with = "crate::model::nullable_vec")]
            pub remote_data: Vec<$crate::model::RemoteData>,
            #[serde(flatten)]
            pub additional_properties: serde_json::Map<String, serde_json::Value>,
        }
    };
}

/// Declare the body of a create or update call.
///
/// Every field must be an `Option`; unset fields are left out of the JSON.
/// Fields the struct does not name can go in `additional_properties`.
macro_rules! request_model {
    (
        $(#[$meta:meta])*
        pub struct $name:ident {
            $( $(#[$fmeta:meta])* pub $field:ident : $ty:ty ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
        pub struct $name {
            $(
                $(#[$fmeta])*
                #[serde(default, skip_serializing_if = "Option::is_none")]
                pub $field: $ty,
            )*
            #[serde(flatten)]
            pub additional_properties: serde_json::Map<String, serde_json::Value>,
        }
    };
}

/// Declare a category client: one accessor per resource plus `integration()`.
macro_rules! category_client {
    (
        $(#[$meta:meta])*
        pub struct $name:ident => $prefix:literal {
            $( $(#[$fmeta:meta])* $method:ident : $model:ty => $path:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy)]
        pub struct $name<'a> {
            client: &'a $crate::request::RequestClient,
        }

        impl<'a> $name<'a> {
            /// Path prefix shared by every endpoint of this category.
            pub const PREFIX: &'static str = $prefix;

            pub(crate) fn new(client: &'a $crate::request::RequestClient) -> Self {
                Self { client }
            }

            $(
                $(#[$fmeta])*
                pub fn $method(self) -> $crate::resource::Resource<'a, $model> {
                    $crate::resource::Resource::new(self.client, concat!($prefix, "/", $path))
                }
            )+

            /// Linked-account management for this category.
            pub fn integration(self) -> $crate::integration::Integration<'a> {
                $crate::integration::Integration::new(self.client, $prefix)
            }
        }
    };
}
