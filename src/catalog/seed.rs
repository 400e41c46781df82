use crate::error::Result;
use crate::models::MealItem;

use super::source::RecipeCatalog;

#[allow(clippy::too_many_arguments)]
fn recipe(
    id: u32,
    name: &str,
    meal_type: &str,
    (kcal, protein_g, fat_g, carbs_g): (f64, f64, f64, f64),
    price: f64,
    weight_g: f64,
    description: &str,
    diet_tags: &[&str],
    allergens: &[&str],
) -> MealItem {
    MealItem {
        id,
        name: name.to_string(),
        meal_type: meal_type.to_string(),
        kcal,
        protein_g,
        fat_g,
        carbs_g,
        price,
        weight_g,
        description: description.to_string(),
        diet_tags: diet_tags.iter().map(|t| t.to_string()).collect(),
        allergens: allergens.iter().map(|a| a.to_string()).collect(),
    }
}

/// Demo catalog: five breakfasts, seven lunches (three light), five dinners
/// (two light) and three snacks.
pub fn demo_recipes() -> Vec<MealItem> {
    vec![
        // Breakfasts
        recipe(1, "Vegetable omelette", "breakfast", (420.0, 25.0, 28.0, 14.0), 60.0, 250.0,
            "Eggs 3 pcs (150g), vegetable mix (pepper, tomato, onion) 100g, oil 5g",
            &["standard"], &["eggs", "milk"]),
        recipe(2, "Oatmeal with banana", "breakfast", (380.0, 11.0, 8.0, 66.0), 35.0, 300.0,
            "Oat porridge 200g, fresh banana 100g, honey 5g",
            &["standard", "vegetarian"], &["gluten"]),
        recipe(3, "Cottage cheese pancakes with berries", "breakfast", (450.0, 22.0, 20.0, 45.0), 55.0, 220.0,
            "Cottage cheese pancakes 170g, berry sauce 50g",
            &["standard", "vegetarian"], &["milk", "eggs", "gluten"]),
        recipe(4, "Avocado toast with egg", "breakfast", (430.0, 17.0, 24.0, 38.0), 65.0, 200.0,
            "Wholegrain bread 2 slices (60g), avocado 80g, poached egg (50g), sesame",
            &["standard", "vegetarian"], &["eggs", "gluten"]),
        recipe(5, "Yogurt with granola and fruit", "breakfast", (360.0, 14.0, 9.0, 55.0), 40.0, 300.0,
            "Natural yogurt 2.5% 200g, honey granola 50g, apple or pear 50g",
            &["standard", "vegetarian"], &["milk", "gluten"]),
        // Lunches
        recipe(8, "Chicken with rice and vegetables", "lunch", (650.0, 42.0, 18.0, 78.0), 85.0, 400.0,
            "Basmati rice 200g, baked chicken fillet 120g, peas and corn 80g",
            &["standard"], &[]),
        recipe(9, "Buckwheat with turkey", "lunch", (600.0, 40.0, 16.0, 74.0), 80.0, 380.0,
            "Boiled buckwheat 200g, stewed turkey fillet 120g, vegetable gravy 60g",
            &["standard"], &[]),
        recipe(10, "Pork chop with mashed potatoes", "lunch", (750.0, 36.0, 40.0, 55.0), 95.0, 420.0,
            "Mashed potatoes with butter and milk 270g, fried pork chop 150g",
            &["standard"], &["milk", "gluten"]),
        recipe(11, "Pasta with chicken and mushrooms", "lunch", (700.0, 34.0, 24.0, 90.0), 90.0, 350.0,
            "Spaghetti 180g, chicken fillet 100g, fried mushrooms 40g, cream sauce 30g",
            &["standard"], &["gluten", "milk"]),
        recipe(31, "Light pumpkin cream soup", "lunch", (320.0, 8.0, 12.0, 45.0), 50.0, 300.0,
            "Pumpkin, carrot and potato soup 280g, cream 10% 20g, pumpkin seeds",
            &["standard", "vegetarian"], &["milk"]),
        recipe(32, "Steamed chicken with broccoli", "lunch", (350.0, 45.0, 5.0, 10.0), 75.0, 280.0,
            "Steamed chicken fillet 150g, boiled broccoli 130g, lemon juice",
            &["standard"], &[]),
        recipe(33, "Quinoa vegetable salad", "lunch", (380.0, 12.0, 14.0, 48.0), 65.0, 250.0,
            "Quinoa 100g, cherry tomatoes 50g, cucumber 50g, arugula, olive oil 10g",
            &["standard", "vegetarian", "vegan"], &[]),
        // Dinners
        recipe(16, "Baked fish with vegetables", "dinner", (520.0, 35.0, 20.0, 40.0), 95.0, 320.0,
            "Baked hake 160g, zucchini, carrot and pepper 160g",
            &["standard"], &["fish"]),
        recipe(17, "Chicken Caesar salad", "dinner", (480.0, 32.0, 26.0, 24.0), 85.0, 280.0,
            "Iceberg lettuce 100g, grilled chicken 100g, cherry tomatoes 30g, Caesar dressing 30g, parmesan 10g, croutons 10g",
            &["standard"], &["milk", "eggs", "gluten"]),
        recipe(22, "Pasta bolognese", "dinner", (720.0, 32.0, 28.0, 95.0), 90.0, 350.0,
            "Durum spaghetti 200g, beef and tomato bolognese 130g, parmesan 20g",
            &["standard"], &["gluten", "milk"]),
        recipe(34, "Tuna salad without mayonnaise", "dinner", (310.0, 28.0, 10.0, 15.0), 80.0, 240.0,
            "Tuna in own juice 80g, boiled egg (50g), lettuce 50g, cucumber 50g, oil 5g",
            &["standard"], &["fish", "eggs"]),
        recipe(35, "Cottage cheese with herbs", "dinner", (250.0, 36.0, 5.0, 8.0), 45.0, 200.0,
            "Cottage cheese 5% 180g, dill and parsley 10g, sour cream 10% 10g",
            &["standard", "vegetarian"], &["milk"]),
        // Snacks
        recipe(23, "Greek yogurt with walnuts", "snack", (250.0, 16.0, 12.0, 16.0), 35.0, 150.0,
            "Greek yogurt 10% 135g, walnuts 15g",
            &["standard"], &["milk", "nuts"]),
        recipe(28, "Banana", "snack", (120.0, 1.5, 0.5, 27.0), 15.0, 120.0,
            "One medium ripe banana (120g)",
            &["standard", "vegetarian", "vegan"], &[]),
        recipe(29, "Carrot sticks with hummus", "snack", (170.0, 6.0, 9.0, 18.0), 25.0, 150.0,
            "Fresh carrot sticks 100g, classic hummus 50g",
            &["standard", "vegetarian", "vegan"], &[]),
    ]
}

/// Upsert the demo recipes into `catalog`. Safe to run repeatedly.
/// Returns how many recipes were new.
pub fn seed_demo(catalog: &mut RecipeCatalog) -> Result<usize> {
    let mut added = 0;
    for item in demo_recipes() {
        if catalog.upsert(item)? {
            added += 1;
        }
    }
    Ok(added)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MealSlot;

    #[test]
    fn test_demo_recipes_are_valid_and_unique() {
        let items = demo_recipes();
        assert!(items.iter().all(MealItem::is_valid));
        let mut ids: Vec<u32> = items.iter().map(|i| i.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), items.len());
        assert!(items.iter().all(|i| i.slot().is_some()));
    }

    #[test]
    fn test_seed_is_idempotent() {
        let mut catalog = RecipeCatalog::default();
        let first = seed_demo(&mut catalog).unwrap();
        let second = seed_demo(&mut catalog).unwrap();
        assert_eq!(first, demo_recipes().len());
        assert_eq!(second, 0);
        assert_eq!(catalog.len(), first);
    }

    #[test]
    fn test_demo_covers_every_slot() {
        let items = demo_recipes();
        for slot in MealSlot::ALL {
            assert!(items.iter().any(|i| i.slot() == Some(slot)), "{}", slot);
        }
    }
}
