//! Application state

use exim_core::config::{load_house_rules, ActorSeed, HouseRules};
use exim_core::{
    roll_aspect, Actor, DieRank, DieResolver, ItemData, ItemId, ItemKind, NotifyKind, Notifier,
    RngDiceEvaluator, RollCard, SheetTab,
};
use std::collections::BTreeMap;
use std::path::Path;
use tracing::{info, warn};

/// Lines kept in the sheet log
const MAX_LOG_LINES: usize = 200;

/// Editable item columns: (field name, column title)
pub const ITEM_FIELDS: [(&str, &str); 4] = [
    ("name", "Name"),
    ("qty", "Qty"),
    ("poids", "Weight"),
    ("description", "Description"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Carac,
    Inventaire,
    Help,
}

impl Tab {
    pub fn all() -> &'static [Tab] {
        &[Tab::Carac, Tab::Inventaire, Tab::Help]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Tab::Carac => SheetTab::Carac.name(),
            Tab::Inventaire => SheetTab::Inventaire.name(),
            Tab::Help => "Help",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogKind {
    Info,
    Warn,
    Success,
    Failure,
}

#[derive(Debug, Clone)]
pub struct LogLine {
    pub kind: LogKind,
    pub text: String,
}

/// Sheet log, doubling as the notification surface
#[derive(Debug, Default)]
pub struct SheetLog {
    pub lines: Vec<LogLine>,
    pub scroll: usize,
}

impl SheetLog {
    pub fn push(&mut self, kind: LogKind, text: impl Into<String>) {
        self.lines.push(LogLine {
            kind,
            text: text.into(),
        });
        if self.lines.len() > MAX_LOG_LINES {
            let excess = self.lines.len() - MAX_LOG_LINES;
            self.lines.drain(..excess);
        }
        self.scroll = self.lines.len().saturating_sub(10);
    }

    pub fn card(&mut self, card: &RollCard) {
        let kind = if card.outcome.succeeded {
            LogKind::Success
        } else {
            LogKind::Failure
        };
        self.push(LogKind::Info, card.headline());
        self.push(kind, format!("  {}", card.body()));
    }
}

impl Notifier for SheetLog {
    fn notify(&mut self, kind: NotifyKind, message: &str) {
        let kind = match kind {
            NotifyKind::Warn => LogKind::Warn,
            NotifyKind::Info => LogKind::Info,
        };
        self.push(kind, message);
    }
}

/// What the text prompt is editing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditTarget {
    ItemField { id: ItemId, field: &'static str },
    Image,
}

#[derive(Debug, Clone)]
pub struct EditState {
    pub target: EditTarget,
    pub buffer: String,
}

pub struct App {
    pub actors: Vec<Actor>,
    pub current_actor: usize,
    pub show_help: bool,
    pub resolver: DieResolver,
    pub dice: RngDiceEvaluator,
    pub log: SheetLog,
    pub selected_aspect: usize,
    pub selected_item: usize,
    pub selected_field: usize,
    pub edit: Option<EditState>,
    pub last_card: Option<RollCard>,
}

impl App {
    pub fn new() -> Self {
        Self::with_dice(Self::load_rules(), RngDiceEvaluator::from_entropy())
    }

    pub fn with_dice(rules: HouseRules, dice: RngDiceEvaluator) -> Self {
        let mut actors = rules.build_actors();
        if actors.is_empty() {
            actors = default_actors(rules.sheet.default_tab);
        }
        // transfers need somewhere to go
        if actors.len() == 1 {
            actors.push(Actor::new("Stash"));
        }

        let mut log = SheetLog::default();
        log.push(LogKind::Info, "Sheet ready.");

        App {
            actors,
            current_actor: 0,
            show_help: false,
            resolver: DieResolver::new(rules.dice.clone()),
            dice,
            log,
            selected_aspect: 0,
            selected_item: 0,
            selected_field: 0,
            edit: None,
            last_card: None,
        }
    }

    fn load_rules() -> HouseRules {
        let mut paths = vec![
            "exim_tui/config/exim.toml".to_string(),
            "config/exim.toml".to_string(),
            "../exim_tui/config/exim.toml".to_string(),
        ];
        if let Ok(path) = std::env::var("EXIM_CONFIG") {
            paths.insert(0, path);
        }

        for path in &paths {
            let path = Path::new(path);
            if !path.exists() {
                continue;
            }
            match load_house_rules(path) {
                Ok(rules) => {
                    info!(path = %path.display(), actors = rules.actors.len(), "loaded house rules");
                    return rules;
                }
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "failed to load house rules");
                }
            }
        }

        info!("no exim.toml found, using default rules");
        HouseRules::default()
    }

    pub fn actor(&self) -> &Actor {
        &self.actors[self.current_actor]
    }

    pub fn actor_mut(&mut self) -> &mut Actor {
        &mut self.actors[self.current_actor]
    }

    fn other_actor_index(&self) -> usize {
        (self.current_actor + 1) % self.actors.len()
    }

    pub fn other_actor(&self) -> &Actor {
        &self.actors[self.other_actor_index()]
    }

    pub fn current_tab(&self) -> Tab {
        if self.show_help {
            return Tab::Help;
        }
        match self.actor().active_tab() {
            SheetTab::Carac => Tab::Carac,
            SheetTab::Inventaire => Tab::Inventaire,
        }
    }

    fn switch_to(&mut self, tab: Tab) {
        match tab {
            Tab::Help => self.show_help = true,
            Tab::Carac => {
                self.show_help = false;
                self.actor_mut().set_active_tab(SheetTab::Carac);
            }
            Tab::Inventaire => {
                self.show_help = false;
                self.actor_mut().set_active_tab(SheetTab::Inventaire);
            }
        }
    }

    pub fn next_tab(&mut self) {
        let tabs = Tab::all();
        let current_idx = tabs.iter().position(|t| *t == self.current_tab()).unwrap_or(0);
        self.switch_to(tabs[(current_idx + 1) % tabs.len()]);
    }

    pub fn prev_tab(&mut self) {
        let tabs = Tab::all();
        let current_idx = tabs.iter().position(|t| *t == self.current_tab()).unwrap_or(0);
        let prev_idx = if current_idx == 0 {
            tabs.len() - 1
        } else {
            current_idx - 1
        };
        self.switch_to(tabs[prev_idx]);
    }

    pub fn set_tab(&mut self, index: usize) {
        if let Some(tab) = Tab::all().get(index) {
            self.switch_to(*tab);
        }
    }

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    /// Show the other actor's sheet
    pub fn toggle_actor(&mut self) {
        self.current_actor = self.other_actor_index();
        self.selected_aspect = 0;
        self.selected_item = 0;
        self.edit = None;
    }

    pub fn aspect_names(&self) -> Vec<String> {
        self.actor().aspects().map(|(name, _)| name.to_string()).collect()
    }

    pub fn selected_item_id(&self) -> Option<ItemId> {
        self.actor().inventory.iter().nth(self.selected_item).map(|i| i.id)
    }

    pub fn on_up(&mut self) {
        match self.current_tab() {
            Tab::Carac => self.selected_aspect = self.selected_aspect.saturating_sub(1),
            Tab::Inventaire => self.selected_item = self.selected_item.saturating_sub(1),
            Tab::Help => self.log.scroll = self.log.scroll.saturating_sub(1),
        }
    }

    pub fn on_down(&mut self) {
        match self.current_tab() {
            Tab::Carac => {
                let count = self.actor().aspects().count();
                if self.selected_aspect + 1 < count {
                    self.selected_aspect += 1;
                }
            }
            Tab::Inventaire => {
                let count = self.actor().inventory.len();
                if self.selected_item + 1 < count {
                    self.selected_item += 1;
                }
            }
            Tab::Help => {
                if self.log.scroll + 1 < self.log.lines.len() {
                    self.log.scroll += 1;
                }
            }
        }
    }

    pub fn on_left(&mut self) {
        if self.current_tab() == Tab::Inventaire {
            self.selected_field = self.selected_field.saturating_sub(1);
        }
    }

    pub fn on_right(&mut self) {
        if self.current_tab() == Tab::Inventaire && self.selected_field + 1 < ITEM_FIELDS.len() {
            self.selected_field += 1;
        }
    }

    pub fn on_enter(&mut self) {
        match self.current_tab() {
            Tab::Carac => self.roll_selected(),
            Tab::Inventaire => self.begin_item_edit(),
            Tab::Help => {}
        }
    }

    pub fn on_space(&mut self) {
        if self.current_tab() == Tab::Carac {
            self.roll_selected();
        }
    }

    /// Roll the highlighted aspect of the current actor
    pub fn roll_selected(&mut self) {
        let Some(aspect) = self.aspect_names().into_iter().nth(self.selected_aspect) else {
            return;
        };
        let actor = &mut self.actors[self.current_actor];
        match roll_aspect(&self.resolver, actor, &mut self.dice, &mut self.log, &aspect) {
            Ok(Some(card)) => {
                self.log.card(&card);
                self.last_card = Some(card);
            }
            Ok(None) => {}
            Err(e) => self.log.push(LogKind::Warn, format!("Roll failed: {}", e)),
        }
    }

    pub fn create_item(&mut self, kind: ItemKind) {
        let id = self.actor_mut().inventory.create(kind);
        self.selected_item = self.actor().inventory.len().saturating_sub(1);
        self.log.push(LogKind::Info, format!("Created {} {}", kind.display_name(), id));
    }

    pub fn delete_selected_item(&mut self) {
        let Some(id) = self.selected_item_id() else {
            return;
        };
        match self.actor_mut().inventory.delete(id) {
            Ok(item) => {
                self.log.push(LogKind::Info, format!("Deleted {}", item.data.name));
                let len = self.actor().inventory.len();
                if self.selected_item >= len {
                    self.selected_item = len.saturating_sub(1);
                }
            }
            Err(e) => self.log.push(LogKind::Warn, e.to_string()),
        }
    }

    /// Drag the highlighted item onto the other actor's sheet
    pub fn transfer_selected_item(&mut self) {
        let Some(id) = self.selected_item_id() else {
            return;
        };
        let target = self.other_actor_index();
        let payload = match self.actor().drag_data(id).and_then(|d| d.to_json()) {
            Ok(payload) => payload,
            Err(e) => {
                self.log.push(LogKind::Warn, e.to_string());
                return;
            }
        };
        match self.actors[target].receive_drop_json(&payload) {
            Ok(result) => {
                let target_name = self.actors[target].name.clone();
                let verb = match result {
                    exim_core::DropResult::Merged(_) => "stacked onto",
                    exim_core::DropResult::Created(_) => "copied to",
                };
                self.log.push(LogKind::Info, format!("Item {} {}", verb, target_name));
            }
            Err(e) => self.log.push(LogKind::Warn, format!("Drop refused: {}", e)),
        }
    }

    pub fn begin_item_edit(&mut self) {
        let Some(id) = self.selected_item_id() else {
            return;
        };
        let (field, _) = ITEM_FIELDS[self.selected_field];
        let buffer = self
            .actor()
            .inventory
            .get(id)
            .map(|item| match field {
                "name" => item.data.name.clone(),
                "qty" => item.data.system.qty.to_string(),
                "poids" => item.data.system.poids.to_string(),
                _ => item.data.system.description.clone(),
            })
            .unwrap_or_default();
        self.edit = Some(EditState {
            target: EditTarget::ItemField { id, field },
            buffer,
        });
    }

    pub fn begin_image_edit(&mut self) {
        let buffer = self.actor().img.clone();
        self.edit = Some(EditState {
            target: EditTarget::Image,
            buffer,
        });
    }

    pub fn edit_push(&mut self, c: char) {
        if let Some(edit) = &mut self.edit {
            edit.buffer.push(c);
        }
    }

    pub fn edit_backspace(&mut self) {
        if let Some(edit) = &mut self.edit {
            edit.buffer.pop();
        }
    }

    pub fn cancel_edit(&mut self) {
        self.edit = None;
    }

    pub fn commit_edit(&mut self) {
        let Some(edit) = self.edit.take() else {
            return;
        };
        match edit.target {
            EditTarget::ItemField { id, field } => {
                if let Err(e) = self.actor_mut().inventory.update_field(id, field, &edit.buffer) {
                    self.log.push(LogKind::Warn, e.to_string());
                }
            }
            EditTarget::Image => self.actor_mut().set_image(edit.buffer),
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

/// Actors used when no config file provides any
fn default_actors(default_tab: SheetTab) -> Vec<Actor> {
    let aspects: BTreeMap<String, String> = [
        ("force", DieRank::D12),
        ("agilite", DieRank::D10),
        ("esprit", DieRank::D8),
        ("charme", DieRank::D6),
    ]
    .into_iter()
    .map(|(name, rank)| (name.to_string(), rank.to_string()))
    .collect();

    let hero = ActorSeed {
        name: "Hero".to_string(),
        img: None,
        aspects,
        items: vec![ItemData::blank(ItemKind::Arme)],
    };
    let stash = ActorSeed {
        name: "Stash".to_string(),
        img: None,
        aspects: BTreeMap::new(),
        items: vec![ItemData::blank(ItemKind::Objet), ItemData::blank(ItemKind::Armure)],
    };
    vec![hero.build(default_tab), stash.build(default_tab)]
}
