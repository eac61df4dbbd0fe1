// ABOUTME: Food reference data and planned food items
// ABOUTME: FoodRecord, FoodItem, categories, origins, serving units and dietary restrictions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::nutrition::{MacroGrams, Macronutrient};

/// Food category used for meal building and substitution
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum FoodCategory {
    /// Lean protein sources
    Protein,
    /// Starches and grains
    Carb,
    /// Oils, nuts and other fat sources
    Fat,
    /// Vegetables
    Vegetable,
    /// Fruit
    Fruit,
    /// Milk products
    Dairy,
}

impl FoodCategory {
    /// All categories in table order
    pub const ALL: [Self; 6] = [
        Self::Protein,
        Self::Carb,
        Self::Fat,
        Self::Vegetable,
        Self::Fruit,
        Self::Dairy,
    ];

    /// The macronutrient a food of this category is sized against
    #[must_use]
    pub const fn primary_macro(&self) -> Macronutrient {
        match self {
            Self::Protein | Self::Dairy => Macronutrient::Protein,
            Self::Carb | Self::Fruit | Self::Vegetable => Macronutrient::Carbs,
            Self::Fat => Macronutrient::Fat,
        }
    }

    /// Lowercase label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Protein => "protein",
            Self::Carb => "carb",
            Self::Fat => "fat",
            Self::Vegetable => "vegetable",
            Self::Fruit => "fruit",
            Self::Dairy => "dairy",
        }
    }

    /// Parse a label, accepting a few common aliases
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "protein" | "proteins" => Some(Self::Protein),
            "carb" | "carbs" | "carbohydrate" | "carbohydrates" => Some(Self::Carb),
            "fat" | "fats" => Some(Self::Fat),
            "vegetable" | "vegetables" | "veg" => Some(Self::Vegetable),
            "fruit" | "fruits" => Some(Self::Fruit),
            "dairy" => Some(Self::Dairy),
            _ => None,
        }
    }
}

impl fmt::Display for FoodCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

/// Where a food comes from, for dietary restriction filtering
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum FoodOrigin {
    /// Plant based
    Plant,
    /// Land animal meat
    Meat,
    /// Fish
    Fish,
    /// Shellfish
    Shellfish,
    /// Eggs
    Egg,
    /// Milk and milk products
    Dairy,
}

/// Unit a food is measured and scaled in
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ServingUnit {
    /// Values are per 100 g, quantities in grams
    #[default]
    #[serde(rename = "g")]
    Grams,
    /// Values are per piece, quantities in whole pieces
    #[serde(rename = "unit")]
    Units,
}

impl ServingUnit {
    /// Amount the nutrition values refer to (100 g or one piece)
    #[must_use]
    pub const fn reference_amount(&self) -> f64 {
        match self {
            Self::Grams => 100.0,
            Self::Units => 1.0,
        }
    }

    /// Short label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Grams => "g",
            Self::Units => "unit",
        }
    }
}

/// Dietary restriction declared on a profile
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum DietaryRestriction {
    /// No meat, fish or shellfish
    Vegetarian,
    /// No animal products
    Vegan,
    /// No land-animal meat
    Pescatarian,
    /// No foods tagged `gluten`
    GlutenFree,
    /// No foods tagged `lactose`
    LactoseFree,
}

impl DietaryRestriction {
    /// Whether a food is allowed under this restriction
    #[must_use]
    pub fn permits(&self, food: &FoodRecord) -> bool {
        match self {
            Self::Vegetarian => !matches!(
                food.origin,
                FoodOrigin::Meat | FoodOrigin::Fish | FoodOrigin::Shellfish
            ),
            Self::Vegan => food.origin == FoodOrigin::Plant,
            Self::Pescatarian => food.origin != FoodOrigin::Meat,
            Self::GlutenFree => !food.has_allergen("gluten"),
            Self::LactoseFree => !food.has_allergen("lactose"),
        }
    }
}

/// Static nutrition reference row
///
/// Energy and macros are per 100 g for gram-measured foods and per piece
/// for unit-measured foods (eggs).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FoodRecord {
    /// Display name
    pub name: String,
    /// Energy per reference amount (kcal)
    pub calories: f64,
    /// Protein per reference amount (grams)
    pub protein_g: f64,
    /// Carbohydrates per reference amount (grams)
    pub carbs_g: f64,
    /// Fat per reference amount (grams)
    pub fat_g: f64,
    /// Measurement unit
    #[serde(default)]
    pub unit: ServingUnit,
    /// Typical serving in `unit`
    pub serving_size: f64,
    /// Category
    pub category: FoodCategory,
    /// Origin for dietary restrictions
    pub origin: FoodOrigin,
    /// Lowercase allergen tags
    #[serde(default)]
    pub allergens: Vec<String>,
}

impl FoodRecord {
    /// Grams of a macronutrient per reference amount
    #[must_use]
    pub const fn macro_per_reference(&self, nutrient: Macronutrient) -> f64 {
        match nutrient {
            Macronutrient::Protein => self.protein_g,
            Macronutrient::Carbs => self.carbs_g,
            Macronutrient::Fat => self.fat_g,
        }
    }

    /// Case-insensitive allergen tag check
    #[must_use]
    pub fn has_allergen(&self, tag: &str) -> bool {
        self.allergens.iter().any(|a| a.eq_ignore_ascii_case(tag))
    }

    /// True when none of the given (lowercase) allergy tags apply
    #[must_use]
    pub fn is_safe_for(&self, allergies: &BTreeSet<String>) -> bool {
        !self
            .allergens
            .iter()
            .any(|tag| allergies.contains(&tag.to_lowercase()))
    }

    /// True when every restriction permits this food
    #[must_use]
    pub fn satisfies(&self, restrictions: &[DietaryRestriction]) -> bool {
        restrictions.iter().all(|r| r.permits(self))
    }

    /// Quantity needed to supply `grams` of a macronutrient
    ///
    /// Gram foods round to whole grams, unit foods to whole pieces (at least
    /// one). Returns `None` when the food has none of that macronutrient.
    #[must_use]
    pub fn quantity_for(&self, nutrient: Macronutrient, grams: f64) -> Option<f64> {
        let per_reference = self.macro_per_reference(nutrient);
        if per_reference <= 0.0 {
            return None;
        }
        let quantity = (grams * self.unit.reference_amount() / per_reference).round();
        Some(self.normalize_quantity(quantity))
    }

    /// Quantity supplying roughly `calories` kcal
    #[must_use]
    pub fn quantity_for_calories(&self, calories: f64) -> Option<f64> {
        if self.calories <= 0.0 {
            return None;
        }
        let quantity = (calories * self.unit.reference_amount() / self.calories).round();
        Some(self.normalize_quantity(quantity))
    }

    fn normalize_quantity(&self, quantity: f64) -> f64 {
        match self.unit {
            ServingUnit::Grams => quantity.max(0.0),
            ServingUnit::Units => quantity.max(1.0),
        }
    }

    /// Energy density per single gram or piece
    #[must_use]
    pub fn calories_per_quantity(&self) -> f64 {
        self.calories / self.unit.reference_amount()
    }

    /// Plan `quantity` of this food, deriving rounded macros
    #[must_use]
    pub fn portion(&self, quantity: f64) -> FoodItem {
        let factor = quantity / self.unit.reference_amount();
        FoodItem {
            name: self.name.clone(),
            category: self.category,
            quantity,
            unit: self.unit,
            calories: (self.calories * factor).round(),
            protein_g: round_tenth(self.protein_g * factor),
            carbs_g: round_tenth(self.carbs_g * factor),
            fat_g: round_tenth(self.fat_g * factor),
        }
    }

    /// Plan one typical serving
    #[must_use]
    pub fn serving(&self) -> FoodItem {
        self.portion(self.serving_size)
    }
}

fn round_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// A food placed in a meal with its derived macros
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FoodItem {
    /// Food name
    pub name: String,
    /// Category of the source record
    pub category: FoodCategory,
    /// Amount in `unit`
    pub quantity: f64,
    /// Measurement unit
    pub unit: ServingUnit,
    /// Energy (kcal, whole number)
    pub calories: f64,
    /// Protein (grams, one decimal)
    pub protein_g: f64,
    /// Carbohydrates (grams, one decimal)
    pub carbs_g: f64,
    /// Fat (grams, one decimal)
    pub fat_g: f64,
}

impl FoodItem {
    /// Macros of this item as a gram triple
    #[must_use]
    pub const fn grams(&self) -> MacroGrams {
        MacroGrams::new(self.protein_g, self.carbs_g, self.fat_g)
    }
}
