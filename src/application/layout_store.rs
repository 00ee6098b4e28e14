//! Layout store
//!
//! Holds layout configuration and sidebar visibility, and derives the
//! offsets and widths the shell positions its regions with.

use std::sync::Arc;

use serde_json::Value;
use tracing::warn;

use crate::config::{FooterConfig, HeaderConfig, LayoutConfig, NavConfig, SidebarConfig, TabsConfig};
use crate::domain::ports::{read_record, write_fields, StateStorage, LAYOUT_RECORD_KEY};
use crate::domain::value_objects::LayoutMode;

const NAV_MODE_FIELD: &str = "navMode";
const SIDEBAR_WIDTH_FIELD: &str = "sidebarWidth";
const SIDEBAR_COLLAPSED_WIDTH_FIELD: &str = "sidebarCollapsedWidth";
const HEADER_HEIGHT_FIELD: &str = "headerHeight";
const HEADER_TITLE_FIELD: &str = "headerTitle";
const SHOW_BREADCRUMB_FIELD: &str = "showBreadcrumb";
const SHOW_TABS_FIELD: &str = "showTabs";
const TABS_HEIGHT_FIELD: &str = "tabsHeight";
const FOOTER_HEIGHT_FIELD: &str = "footerHeight";

const SIDEBAR_Z_INDEX_DOCKED: u32 = 95;
const SIDEBAR_Z_INDEX_FLOATING: u32 = 99;

/// Derived placement of the shell regions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutMetrics {
    /// Current sidebar width (collapsed or expanded)
    pub sidebar_width: u32,
    /// Distance of the sidebar from the window top
    pub side_offset_top: u32,
    /// Distance of the header from the window left
    pub header_offset_left: u32,
    /// Distance of the content and footer from the window left
    pub content_offset_left: u32,
    pub sidebar_z_index: u32,
}

pub struct LayoutStore {
    layout: LayoutConfig,
    header: HeaderConfig,
    sidebar: SidebarConfig,
    tabs: TabsConfig,
    footer: FooterConfig,
    sidebar_visible: bool,
    storage: Arc<dyn StateStorage>,
}

impl LayoutStore {
    /// Create the store from configuration, then apply persisted settings
    pub fn new(config: &NavConfig, storage: Arc<dyn StateStorage>) -> Self {
        let mut store = Self {
            layout: config.layout,
            header: config.header.clone(),
            sidebar: config.sidebar,
            tabs: config.tabs,
            footer: config.footer,
            sidebar_visible: false,
            storage,
        };
        store.restore();
        store
    }

    fn restore(&mut self) {
        let record = read_record(self.storage.as_ref(), LAYOUT_RECORD_KEY);

        if let Some(mode) = record.get(NAV_MODE_FIELD).and_then(Value::as_str) {
            match mode.parse::<LayoutMode>() {
                Ok(mode) => self.layout.nav_mode = mode,
                Err(error) => warn!(error = %error, "ignoring persisted layout mode"),
            }
        }
        if let Some(width) = read_u32(&record, SIDEBAR_WIDTH_FIELD) {
            self.sidebar.width = width;
        }
        if let Some(width) = read_u32(&record, SIDEBAR_COLLAPSED_WIDTH_FIELD) {
            self.sidebar.collapsed_width = width;
        }
        if let Some(height) = read_u32(&record, HEADER_HEIGHT_FIELD) {
            self.header.height = height;
        }
        if let Some(title) = record.get(HEADER_TITLE_FIELD).and_then(Value::as_str) {
            self.header.title = title.to_string();
        }
        if let Some(show) = record.get(SHOW_BREADCRUMB_FIELD).and_then(Value::as_bool) {
            self.header.show_breadcrumb = show;
        }
        if let Some(show) = record.get(SHOW_TABS_FIELD).and_then(Value::as_bool) {
            self.tabs.show = show;
        }
        if let Some(height) = read_u32(&record, TABS_HEIGHT_FIELD) {
            self.tabs.height = height;
        }
        if let Some(height) = read_u32(&record, FOOTER_HEIGHT_FIELD) {
            self.footer.height = height;
        }
    }

    pub fn nav_mode(&self) -> LayoutMode {
        self.layout.nav_mode
    }

    /// Change the layout mode. Menu selection is reset by
    /// `MenuStore::change_layout_mode`, which is the public entry point.
    pub(crate) fn set_nav_mode(&mut self, mode: LayoutMode) {
        self.layout.nav_mode = mode;
        write_fields(
            self.storage.as_ref(),
            LAYOUT_RECORD_KEY,
            [(NAV_MODE_FIELD, Value::from(mode.as_str()))],
        );
    }

    pub fn layout_config(&self) -> &LayoutConfig {
        &self.layout
    }

    pub fn header(&self) -> &HeaderConfig {
        &self.header
    }

    /// Apply `update` to the header settings and persist them
    pub fn update_header(&mut self, update: impl FnOnce(&mut HeaderConfig)) {
        update(&mut self.header);
        write_fields(
            self.storage.as_ref(),
            LAYOUT_RECORD_KEY,
            [
                (HEADER_HEIGHT_FIELD, Value::from(self.header.height)),
                (HEADER_TITLE_FIELD, Value::from(self.header.title.clone())),
                (SHOW_BREADCRUMB_FIELD, Value::from(self.header.show_breadcrumb)),
            ],
        );
    }

    pub fn sidebar(&self) -> &SidebarConfig {
        &self.sidebar
    }

    pub fn update_sidebar(&mut self, update: impl FnOnce(&mut SidebarConfig)) {
        update(&mut self.sidebar);
        write_fields(
            self.storage.as_ref(),
            LAYOUT_RECORD_KEY,
            [
                (SIDEBAR_WIDTH_FIELD, Value::from(self.sidebar.width)),
                (
                    SIDEBAR_COLLAPSED_WIDTH_FIELD,
                    Value::from(self.sidebar.collapsed_width),
                ),
            ],
        );
    }

    pub fn tabs(&self) -> &TabsConfig {
        &self.tabs
    }

    pub fn update_tabs(&mut self, update: impl FnOnce(&mut TabsConfig)) {
        update(&mut self.tabs);
        write_fields(
            self.storage.as_ref(),
            LAYOUT_RECORD_KEY,
            [
                (SHOW_TABS_FIELD, Value::from(self.tabs.show)),
                (TABS_HEIGHT_FIELD, Value::from(self.tabs.height)),
            ],
        );
    }

    pub fn footer(&self) -> &FooterConfig {
        &self.footer
    }

    pub fn update_footer(&mut self, update: impl FnOnce(&mut FooterConfig)) {
        update(&mut self.footer);
        write_fields(
            self.storage.as_ref(),
            LAYOUT_RECORD_KEY,
            [(FOOTER_HEIGHT_FIELD, Value::from(self.footer.height))],
        );
    }

    pub fn sidebar_visible(&self) -> bool {
        self.sidebar_visible
    }

    /// Show or hide the sidebar regardless of layout mode
    pub fn set_sidebar_visible(&mut self, visible: bool) {
        self.sidebar_visible = visible;
    }

    pub fn sidebar_width(&self, collapsed: bool) -> u32 {
        if collapsed {
            self.sidebar.collapsed_width
        } else {
            self.sidebar.width
        }
    }

    pub fn metrics(&self, collapsed: bool) -> LayoutMetrics {
        let mode = self.nav_mode();
        let sidebar_width = self.sidebar_width(collapsed);
        let side_width = if self.sidebar_visible { sidebar_width } else { 0 };

        LayoutMetrics {
            sidebar_width,
            side_offset_top: match mode {
                LayoutMode::MixedSide => self.header.height,
                _ => 0,
            },
            header_offset_left: match mode {
                LayoutMode::Side => side_width,
                _ => 0,
            },
            content_offset_left: if mode.has_sidebar() { side_width } else { 0 },
            sidebar_z_index: match mode {
                LayoutMode::Side | LayoutMode::MixedSide => SIDEBAR_Z_INDEX_DOCKED,
                LayoutMode::Top => SIDEBAR_Z_INDEX_FLOATING,
            },
        }
    }
}

fn read_u32(record: &crate::domain::ports::StateRecord, field: &str) -> Option<u32> {
    record
        .get(field)
        .and_then(Value::as_u64)
        .and_then(|value| u32::try_from(value).ok())
}
