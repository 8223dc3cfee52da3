//! Generator for port error enums.
//!
//! Each variant gets a `thiserror` message and a snake_case constructor whose
//! parameters accept anything convertible into the field type. The enum also
//! gets a `kind()` accessor naming the variant in snake_case, which adapters
//! log as a stable field next to the rendered message.

macro_rules! define_port_error {
    (@ctor $variant:ident) => {
        ::paste::paste! {
            pub fn [<$variant:snake>]() -> Self {
                Self::$variant
            }
        }
    };

    (@ctor $variant:ident { $($field:ident : $ty:ty),* $(,)? }) => {
        define_port_error!(@ctor_impl $variant () () $( $field : $ty, )*);
    };

    (@ctor_impl $variant:ident ($($params:tt)*) ($($inits:tt)*)) => {
        ::paste::paste! {
            pub fn [<$variant:snake>]($($params)*) -> Self {
                Self::$variant { $($inits)* }
            }
        }
    };

    (
        @ctor_impl $variant:ident ($($params:tt)*) ($($inits:tt)*)
        $field:ident : $ty:ty, $($rest:tt)*
    ) => {
        define_port_error!(
            @ctor_impl
            $variant
            ($($params)* $field: impl Into<$ty>,)
            ($($inits)* $field: $field.into(),)
            $($rest)*
        );
    };

    (
        $(#[$outer:meta])*
        pub enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident $( { $($field:ident : $ty:ty),* $(,)? } )? => $message:expr
            ),* $(,)?
        }
    ) => {
        $(#[$outer])*
        #[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                #[error($message)]
                $variant $( { $($field : $ty),* } )?,
            )*
        }

        impl $name {
            $(
                define_port_error!(@ctor $variant $( { $($field : $ty),* } )?);
            )*

            /// Snake_case name of the variant, for structured logs.
            #[must_use]
            pub const fn kind(&self) -> &'static str {
                ::paste::paste! {
                    match self {
                        $( Self::$variant { .. } => stringify!([<$variant:snake>]), )*
                    }
                }
            }
        }
    };
}

pub(crate) use define_port_error;
