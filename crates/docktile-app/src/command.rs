use docktile_core::ResourceKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    /// Keystrokes edit the filter pattern of the current view.
    FilterInput,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Quit,
    Refresh,
    NextView,
    PrevView,
    ShowView(ResourceKind),
    SelectNext,
    SelectPrev,
    PageDown,
    PageUp,
    SelectFirst,
    SelectLast,
    Sort,
    ToggleSortOrder,
    EnterFilter,
    ClearFilter,
    FilterInput(char),
    FilterBackspace,
    FilterConfirm,
    FilterCancel,
}

impl Command {
    /// Maps a `[keybindings]` action name to its command.
    pub fn from_name(name: &str) -> Option<Self> {
        let cmd = match name {
            "quit" => Self::Quit,
            "refresh" => Self::Refresh,
            "next_view" => Self::NextView,
            "prev_view" => Self::PrevView,
            "containers" => Self::ShowView(ResourceKind::Containers),
            "images" => Self::ShowView(ResourceKind::Images),
            "networks" => Self::ShowView(ResourceKind::Networks),
            "volumes" => Self::ShowView(ResourceKind::Volumes),
            "filter" => Self::EnterFilter,
            "clear_filter" => Self::ClearFilter,
            "down" => Self::SelectNext,
            "up" => Self::SelectPrev,
            "page_down" => Self::PageDown,
            "page_up" => Self::PageUp,
            "top" => Self::SelectFirst,
            "bottom" => Self::SelectLast,
            "sort" => Self::Sort,
            "toggle_sort_order" => Self::ToggleSortOrder,
            _ => return None,
        };
        Some(cmd)
    }
}

pub fn command_description(name: &str) -> &'static str {
    match name {
        "quit" => "Quit",
        "refresh" => "Refresh",
        "next_view" => "Next view",
        "prev_view" => "Previous view",
        "containers" => "Containers",
        "images" => "Images",
        "networks" => "Networks",
        "volumes" => "Volumes",
        "filter" => "Filter",
        "clear_filter" => "Clear filter",
        "down" => "Down",
        "up" => "Up",
        "page_down" => "Page down",
        "page_up" => "Page up",
        "top" => "Top",
        "bottom" => "Bottom",
        "sort" => "Sort",
        "toggle_sort_order" => "Reverse sort",
        _ => "",
    }
}
