//! Macros for ergonomic action definitions.

/// Generate an `Action` implementation for an existing enum.
///
/// Every variant is mapped to its kind string. The generated `match` is
/// exhaustive, so adding a variant without a kind fails to compile.
///
/// # Example
///
/// ```
/// use tether::action_kinds;
/// use tether::core::Action;
///
/// #[derive(Clone, Debug)]
/// pub enum TaskAction {
///     Create { title: String },
///     Finish(u64),
///     Reset,
/// }
///
/// action_kinds! {
///     TaskAction {
///         Create => "CREATE_TASK",
///         Finish => "FINISH_TASK",
///         Reset => "RESET",
///     }
/// }
///
/// assert_eq!(TaskAction::Finish(3).kind(), "FINISH_TASK");
/// ```
#[macro_export]
macro_rules! action_kinds {
    (
        $name:ident {
            $($variant:ident => $kind:literal),* $(,)?
        }
    ) => {
        impl $crate::core::Action for $name {
            fn kind(&self) -> &'static str {
                match self {
                    $(Self::$variant { .. } => $kind),*
                }
            }
        }
    };
}
