//! Items a player can acquire, and the ordered inventory that holds them.

use serde::Serialize;

/// An item that a stage can grant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Item {
    /// Granted by solving the symbol puzzle; unlocks later branches.
    MysteryKey,
    /// Found after slipping past the traps.
    RecoveryPotion,
    /// Granted when the key pacifies the stone guardian.
    GuardiansBlessing,
}

impl Item {
    /// The display name, as written into the story log and the inventory.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::MysteryKey => "神秘钥匙",
            Self::RecoveryPotion => "恢复药剂",
            Self::GuardiansBlessing => "守护者的祝福",
        }
    }

    /// The icon shown next to the item.
    #[must_use]
    pub fn icon(self) -> &'static str {
        match self {
            Self::MysteryKey => "🔑",
            Self::RecoveryPotion => "🧪",
            Self::GuardiansBlessing => "🙏",
        }
    }

    /// Looks an item up by its display name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        [Self::MysteryKey, Self::RecoveryPotion, Self::GuardiansBlessing]
            .into_iter()
            .find(|item| item.name() == name)
    }
}

/// Icon for an arbitrary inventory name, including treasure names that are
/// not acquirable items. Unknown names get a gift box.
#[must_use]
pub fn icon_for(name: &str) -> &'static str {
    if let Some(item) = Item::from_name(name) {
        return item.icon();
    }
    match name {
        "古代金币" => "💰",
        "智慧古籍" => "📜",
        "英雄之剑" => "⚔️",
        "能量水晶" => "💎",
        _ => "🎁",
    }
}

/// Items in acquisition order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Inventory {
    items: Vec<Item>,
}

impl Inventory {
    /// Creates an empty inventory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `item`. Duplicates are kept; the script never grants one twice.
    pub fn add(&mut self, item: Item) {
        self.items.push(item);
    }

    /// Whether `item` has been acquired.
    #[must_use]
    pub fn contains(&self, item: Item) -> bool {
        self.items.contains(&item)
    }

    /// Acquired items, in order.
    #[must_use]
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Display names, in order.
    #[must_use]
    pub fn names(&self) -> Vec<String> {
        self.items.iter().map(|item| item.name().to_owned()).collect()
    }

    /// Number of acquired items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether nothing has been acquired yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Drops every item.
    pub fn clear(&mut self) {
        self.items.clear();
    }
}
