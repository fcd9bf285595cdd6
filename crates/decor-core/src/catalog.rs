//! # Seed Data
//!
//! The immutable catalog, the seeded order history and the static
//! presentation metadata (category bar, navigation tabs, profile screen).
//!
//! Everything here is `'static`: the storefront hands out shared
//! references and never copies or mutates these records.

use crate::money::Money;
use crate::types::{
    Category, CategoryFilter, CategoryOption, Order, Product, ProductId, Profile,
    ProfileMenuItem, Tab, TabOption,
};

const SERENITY_IMAGE: &str = "https://cdn.poehali.dev/projects/8d011bcf-07f5-4566-bc30-992a40c4460f/files/857d375f-b96a-4570-a781-28603868cb40.jpg";
const ABSTRACT_GOLD_IMAGE: &str = "https://cdn.poehali.dev/projects/8d011bcf-07f5-4566-bc30-992a40c4460f/files/8b993a45-6f40-448e-b6be-57ee9d1eb2ce.jpg";
const GENESIS_IMAGE: &str = "https://cdn.poehali.dev/projects/8d011bcf-07f5-4566-bc30-992a40c4460f/files/ed360931-e432-40ae-a479-44b335ac0c06.jpg";

/// The product catalog, in display order.
pub static PRODUCTS: [Product; 6] = [
    Product {
        id: ProductId::new(1),
        name: "Керамическая ваза Serenity",
        price: Money::from_units(24_500),
        category: Category::Vase,
        image: SERENITY_IMAGE,
        description: "Элегантная ваза с органичными формами",
    },
    Product {
        id: ProductId::new(2),
        name: "Панно Abstract Gold",
        price: Money::from_units(48_900),
        category: Category::Panel,
        image: ABSTRACT_GOLD_IMAGE,
        description: "Геометрическое панно с золотыми акцентами",
    },
    Product {
        id: ProductId::new(3),
        name: "Полка Genesis",
        price: Money::from_units(35_600),
        category: Category::Shelf,
        image: GENESIS_IMAGE,
        description: "Минималистичная полка премиум класса",
    },
    Product {
        id: ProductId::new(4),
        name: "Скульптура Essence",
        price: Money::from_units(67_800),
        category: Category::Sculpture,
        image: SERENITY_IMAGE,
        description: "Современная абстрактная скульптура",
    },
    Product {
        id: ProductId::new(5),
        name: "Ваза Minimalist",
        price: Money::from_units(19_900),
        category: Category::Vase,
        image: SERENITY_IMAGE,
        description: "Строгие линии и чистые формы",
    },
    Product {
        id: ProductId::new(6),
        name: "Панно Luxe",
        price: Money::from_units(52_000),
        category: Category::Panel,
        image: ABSTRACT_GOLD_IMAGE,
        description: "Роскошное настенное украшение",
    },
];

/// Order history shown on the orders tab.
pub static ORDERS: [Order; 1] = [Order {
    id: "ORD-2024-001",
    date: "15 ноября 2024",
    total: Money::from_units(73_400),
    items: 2,
}];

/// Category bar entries, `all` first.
pub static CATEGORY_OPTIONS: [CategoryOption; 5] = [
    CategoryOption {
        id: CategoryFilter::All,
        label: "Все",
        icon: "LayoutGrid",
    },
    CategoryOption {
        id: CategoryFilter::Shelf,
        label: "Полки",
        icon: "Layers",
    },
    CategoryOption {
        id: CategoryFilter::Panel,
        label: "Панно",
        icon: "Square",
    },
    CategoryOption {
        id: CategoryFilter::Vase,
        label: "Вазы",
        icon: "Wine",
    },
    CategoryOption {
        id: CategoryFilter::Sculpture,
        label: "Скульптуры",
        icon: "Box",
    },
];

/// Navigation bar entries.
pub static TAB_OPTIONS: [TabOption; 4] = [
    TabOption {
        id: Tab::Catalog,
        label: "Каталог",
        icon: "Store",
    },
    TabOption {
        id: Tab::Favorites,
        label: "Избранное",
        icon: "Heart",
    },
    TabOption {
        id: Tab::Orders,
        label: "Заказы",
        icon: "Package",
    },
    TabOption {
        id: Tab::Profile,
        label: "Профиль",
        icon: "User",
    },
];

static PROFILE_MENU: [ProfileMenuItem; 4] = [
    ProfileMenuItem {
        label: "Адреса доставки",
        icon: "MapPin",
    },
    ProfileMenuItem {
        label: "Способы оплаты",
        icon: "CreditCard",
    },
    ProfileMenuItem {
        label: "Уведомления",
        icon: "Bell",
    },
    ProfileMenuItem {
        label: "Настройки",
        icon: "Settings",
    },
];

/// The guest profile. There is no sign-in, so it never changes.
pub static PROFILE: Profile = Profile {
    name: "Гость",
    email: "guest@example.com",
    menu: &PROFILE_MENU,
};

/// Looks up a catalog product by id.
pub fn find_product(id: ProductId) -> Option<&'static Product> {
    PRODUCTS.iter().find(|p| p.id == id)
}
