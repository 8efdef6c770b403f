/// Closed enum that travels through the address bar as a short string token.
///
/// Sort fields, dialog kinds, detail tabs and fixed column names all implement
/// this, so the codec never has to know a concrete screen.
pub trait UrlToken: Sized + Copy + Eq + 'static {
    /// Every variant, in declaration order
    const ALL: &'static [Self];

    /// Wire representation of the token
    fn code(&self) -> &'static str;

    /// Parse a wire token; unknown tokens yield `None`
    fn from_code(code: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|token| token.code() == code)
    }
}

/// Placeholder for screens that have no tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoTab {}

impl UrlToken for NoTab {
    const ALL: &'static [Self] = &[];

    fn code(&self) -> &'static str {
        match *self {}
    }
}

/// Dialogs shared by every list screen that supports saved searches.
///
/// Screen dialog enums embed it as a variant, e.g. `SaleListDialog::Tab(..)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum TabAction {
    SaveSearch,
    DeleteSearch,
}

impl TabAction {
    pub const SAVE_SEARCH: &'static str = "save-search";
    pub const DELETE_SEARCH: &'static str = "delete-search";
}

impl UrlToken for TabAction {
    const ALL: &'static [Self] = &[TabAction::SaveSearch, TabAction::DeleteSearch];

    fn code(&self) -> &'static str {
        match self {
            TabAction::SaveSearch => Self::SAVE_SEARCH,
            TabAction::DeleteSearch => Self::DELETE_SEARCH,
        }
    }
}

/// List dialog enums that embed the saved-search actions
pub trait TabDialog: UrlToken {
    fn tab(action: TabAction) -> Self;
    fn tab_action(&self) -> Option<TabAction>;
}

/// Declares a closed enum together with its `UrlToken` codes.
///
/// ```
/// contracts::url_token! {
///     #[derive(Debug, Clone, Copy, PartialEq, Eq)]
///     pub enum Tab {
///         Products => "products",
///         Categories => "categories",
///     }
/// }
/// use contracts::shared::list_view::UrlToken;
/// assert_eq!(Tab::from_code("products"), Some(Tab::Products));
/// ```
#[macro_export]
macro_rules! url_token {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $($(#[$variant_meta:meta])* $variant:ident => $code:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        $vis enum $name {
            $($(#[$variant_meta])* $variant),+
        }

        impl $crate::shared::list_view::UrlToken for $name {
            const ALL: &'static [Self] = &[$($name::$variant),+];

            fn code(&self) -> &'static str {
                match self {
                    $($name::$variant => $code),+
                }
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_code_matches_declared_codes() {
        for action in TabAction::ALL {
            assert_eq!(TabAction::from_code(action.code()), Some(*action));
        }
        assert_eq!(TabAction::from_code("save_search"), None);
    }

    #[test]
    fn test_no_tab_never_parses() {
        assert_eq!(NoTab::from_code(""), None);
        assert_eq!(NoTab::from_code("products"), None);
    }
}
