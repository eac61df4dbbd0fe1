// ABOUTME: Built-in nutrition reference table
// ABOUTME: Values per 100 g (eggs per unit) with typical servings and allergen tags
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use nutriplan_core::models::FoodCategory::{Carb, Dairy, Fat, Fruit, Protein, Vegetable};
use nutriplan_core::models::FoodOrigin::{Egg, Fish, Meat, Plant, Shellfish};
use nutriplan_core::models::{FoodCategory, FoodOrigin, FoodRecord, ServingUnit};

struct Row {
    name: &'static str,
    macros: (f64, f64, f64, f64),
    serving: f64,
    unit: ServingUnit,
    category: FoodCategory,
    origin: FoodOrigin,
    allergens: &'static [&'static str],
}

impl Row {
    const fn grams(
        name: &'static str,
        macros: (f64, f64, f64, f64),
        serving: f64,
        category: FoodCategory,
        origin: FoodOrigin,
        allergens: &'static [&'static str],
    ) -> Self {
        Self {
            name,
            macros,
            serving,
            unit: ServingUnit::Grams,
            category,
            origin,
            allergens,
        }
    }

    fn into_record(self) -> FoodRecord {
        let (calories, protein_g, carbs_g, fat_g) = self.macros;
        FoodRecord {
            name: self.name.to_owned(),
            calories,
            protein_g,
            carbs_g,
            fat_g,
            unit: self.unit,
            serving_size: self.serving,
            category: self.category,
            origin: self.origin,
            allergens: self.allergens.iter().map(|a| (*a).to_owned()).collect(),
        }
    }
}

// (kcal, protein, carbs, fat)
const ROWS: [Row; 34] = [
    // Protein
    Row::grams("Pechuga de pollo", (165.0, 31.0, 0.0, 3.6), 150.0, Protein, Meat, &[]),
    Row::grams("Pechuga de pavo", (135.0, 30.0, 0.0, 1.0), 150.0, Protein, Meat, &[]),
    Row::grams("Salmón", (208.0, 20.0, 0.0, 13.0), 150.0, Protein, Fish, &["fish"]),
    Row::grams("Atún al natural", (116.0, 26.0, 0.0, 1.0), 120.0, Protein, Fish, &["fish"]),
    Row::grams("Ternera magra", (158.0, 26.0, 0.0, 6.0), 150.0, Protein, Meat, &[]),
    Row {
        name: "Huevos",
        macros: (78.0, 6.3, 0.6, 5.3),
        serving: 2.0,
        unit: ServingUnit::Units,
        category: Protein,
        origin: Egg,
        allergens: &["egg"],
    },
    Row::grams("Claras de huevo", (52.0, 11.0, 0.7, 0.2), 200.0, Protein, Egg, &["egg"]),
    Row::grams("Tofu", (76.0, 8.0, 1.9, 4.8), 200.0, Protein, Plant, &["soy"]),
    Row::grams("Merluza", (86.0, 18.0, 0.0, 1.3), 150.0, Protein, Fish, &["fish"]),
    Row::grams("Gambas", (99.0, 24.0, 0.2, 0.3), 120.0, Protein, Shellfish, &["shellfish"]),
    // Carbohydrate
    Row::grams("Arroz blanco", (130.0, 2.7, 28.0, 0.3), 150.0, Carb, Plant, &[]),
    Row::grams("Arroz integral", (112.0, 2.3, 24.0, 0.8), 150.0, Carb, Plant, &[]),
    Row::grams("Pasta", (131.0, 5.0, 25.0, 1.1), 150.0, Carb, Plant, &["gluten"]),
    Row::grams("Patata", (87.0, 1.9, 20.0, 0.1), 200.0, Carb, Plant, &[]),
    Row::grams("Boniato", (86.0, 1.6, 20.0, 0.1), 200.0, Carb, Plant, &[]),
    Row::grams("Avena", (389.0, 16.9, 66.0, 6.9), 60.0, Carb, Plant, &["gluten"]),
    Row::grams("Pan integral", (247.0, 13.0, 41.0, 3.4), 60.0, Carb, Plant, &["gluten"]),
    Row::grams("Quinoa", (120.0, 4.4, 21.0, 1.9), 150.0, Carb, Plant, &[]),
    // Vegetables
    Row::grams("Brócoli", (34.0, 2.8, 7.0, 0.4), 150.0, Vegetable, Plant, &[]),
    Row::grams("Espinacas", (23.0, 2.9, 3.6, 0.4), 100.0, Vegetable, Plant, &[]),
    Row::grams("Judías verdes", (31.0, 1.8, 7.0, 0.2), 150.0, Vegetable, Plant, &[]),
    Row::grams("Ensalada mixta", (20.0, 1.2, 3.5, 0.2), 150.0, Vegetable, Plant, &[]),
    Row::grams("Calabacín", (17.0, 1.2, 3.1, 0.3), 150.0, Vegetable, Plant, &[]),
    // Fat
    Row::grams("Aceite de oliva", (884.0, 0.0, 0.0, 100.0), 10.0, Fat, Plant, &[]),
    Row::grams("Aguacate", (160.0, 2.0, 9.0, 15.0), 70.0, Fat, Plant, &[]),
    Row::grams("Almendras", (579.0, 21.0, 22.0, 50.0), 25.0, Fat, Plant, &["nuts"]),
    Row::grams("Nueces", (654.0, 15.0, 14.0, 65.0), 25.0, Fat, Plant, &["nuts"]),
    Row::grams("Crema de cacahuete", (588.0, 25.0, 20.0, 50.0), 20.0, Fat, Plant, &["peanuts"]),
    // Fruit
    Row::grams("Plátano", (89.0, 1.1, 23.0, 0.3), 120.0, Fruit, Plant, &[]),
    Row::grams("Manzana", (52.0, 0.3, 14.0, 0.2), 150.0, Fruit, Plant, &[]),
    Row::grams("Frutos rojos", (57.0, 0.7, 14.0, 0.3), 100.0, Fruit, Plant, &[]),
    // Dairy
    Row::grams("Yogur griego", (97.0, 9.0, 3.9, 5.0), 125.0, Dairy, FoodOrigin::Dairy, &["lactose"]),
    Row::grams("Queso fresco batido", (50.0, 8.0, 4.0, 0.2), 200.0, Dairy, FoodOrigin::Dairy, &["lactose"]),
    Row::grams("Leche semidesnatada", (46.0, 3.2, 4.7, 1.6), 250.0, Dairy, FoodOrigin::Dairy, &["lactose"]),
];

/// Build the shipped food table
pub(super) fn records() -> Vec<FoodRecord> {
    ROWS.into_iter().map(Row::into_record).collect()
}
