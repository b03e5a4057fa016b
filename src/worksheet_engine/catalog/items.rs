use crate::worksheet_engine::models::{Item, ItemCategory};

const fn item(
    id: &'static str, name: &'static str, name_en: &'static str, price: u32,
    category: ItemCategory, emoji: &'static str, icon: &'static str,
) -> Item {
    Item { id, name, name_en, price, category, emoji, icon }
}

use ItemCategory::{Armor, Food, Material, Tool, Weapon};

/// 40 shop items priced 2..=20.
pub static ITEMS: &[Item] = &[
    // Weapons
    item("iron-sword",      "铁剑",   "Iron Sword",      12, Weapon,   "⚔️", "iron_sword.png"),
    item("bow",             "弓",     "Bow",             15, Weapon,   "🏹", "bow.png"),
    item("crossbow",        "弩",     "Crossbow",        18, Weapon,   "🏹", "crossbow.png"),
    item("trident",         "三叉戟", "Trident",         20, Weapon,   "🔱", "trident.png"),
    item("axe",             "斧",     "Iron Axe",        10, Weapon,   "🪓", "iron_axe.png"),
    item("mace",            "锤",     "Mace",            16, Weapon,   "⚒️", "mace.png"),
    // Tools
    item("wood-pickaxe",    "木镐",   "Wood Pickaxe",     4, Tool,     "⛏️", "wood_pickaxe.png"),
    item("stone-pickaxe",   "石镐",   "Stone Pickaxe",    7, Tool,     "⛏️", "stone_pickaxe.png"),
    item("iron-pickaxe",    "铁镐",   "Iron Pickaxe",    12, Tool,     "⛏️", "iron_pickaxe.png"),
    item("gold-pickaxe",    "金镐",   "Gold Pickaxe",    14, Tool,     "⛏️", "gold_pickaxe.png"),
    item("diamond-pickaxe", "钻石镐", "Diamond Pickaxe", 18, Tool,     "💎", "diamond_pickaxe.png"),
    item("wood-shovel",     "木铲",   "Wood Shovel",      2, Tool,     "🥄", "wood_shovel.png"),
    item("iron-shovel",     "铁铲",   "Iron Shovel",      6, Tool,     "🥄", "iron_shovel.png"),
    item("hoe",             "锄头",   "Iron Hoe",         5, Tool,     "⛏️", "iron_hoe.png"),
    // Armor
    item("helmet",          "头盔",   "Iron Helmet",     10, Armor,    "🪖", "iron_helmet.png"),
    item("chestplate",      "胸甲",   "Iron Chestplate", 16, Armor,    "👕", "iron_chestplate.png"),
    item("leggings",        "护腿",   "Iron Leggings",   14, Armor,    "👖", "iron_leggings.png"),
    item("boots",           "靴子",   "Iron Boots",       8, Armor,    "👢", "iron_boots.png"),
    item("shield",          "盾牌",   "Shield",          12, Armor,    "🛡️", "shield.png"),
    item("turtle-helmet",   "海龟壳", "Turtle Shell",    15, Armor,    "🐢", "turtle_helmet.png"),
    // Food
    item("apple",           "苹果",   "Apple",            3, Food,     "🍎", "apple.png"),
    item("bread",           "面包",   "Bread",            4, Food,     "🍞", "bread.png"),
    item("carrot",          "胡萝卜", "Carrot",           2, Food,     "🥕", "carrot.png"),
    item("potato",          "土豆",   "Potato",           2, Food,     "🥔", "potato.png"),
    item("golden-apple",    "金苹果", "Golden Apple",    20, Food,     "✨", "golden_apple.png"),
    item("cooked-pork",     "烤猪肉", "Cooked Pork",      8, Food,     "🍖", "cooked_pork.png"),
    item("cooked-beef",     "牛排",   "Steak",           10, Food,     "🥩", "cooked_beef.png"),
    item("cooked-chicken",  "烤鸡",   "Cooked Chicken",   7, Food,     "🍗", "cooked_chicken.png"),
    item("cookie",          "曲奇",   "Cookie",           3, Food,     "🍪", "cookie.png"),
    item("cake",            "蛋糕",   "Cake",            12, Food,     "🎂", "cake.png"),
    // Materials
    item("coal",            "煤炭",   "Coal",             5, Material, "⚫", "coal.png"),
    item("copper-ingot",    "铜锭",   "Copper Ingot",     8, Material, "🥉", "copper_ingot.png"),
    item("iron-ingot",      "铁锭",   "Iron Ingot",      10, Material, "🔩", "iron_ingot.png"),
    item("gold-ingot",      "金锭",   "Gold Ingot",      15, Material, "🥇", "gold_ingot.png"),
    item("diamond",         "钻石",   "Diamond",         20, Material, "💎", "diamond.png"),
    item("emerald",         "绿宝石", "Emerald",         18, Material, "💚", "emerald.png"),
    item("lapis",           "青金石", "Lapis Lazuli",     8, Material, "💙", "lapis_lazuli.png"),
    item("redstone",        "红石",   "Redstone",         9, Material, "❤️", "redstone.png"),
    item("stick",           "木棍",   "Stick",            2, Material, "🪵", "stick.png"),
    item("string",          "线",     "String",           3, Material, "🧵", "string.png"),
];

/// Look up a catalog item by id.
pub fn find_item(id: &str) -> Option<&'static Item> {
    ITEMS.iter().find(|i| i.id == id)
}
