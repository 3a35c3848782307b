//! Data created directly in the domain layer, so the tests only go through
//! the API for the operation under test.
use foodgram::core::catalog::{Ingredient, IngredientForm, Tag, TagForm};
use foodgram::core::recipes::{IngredientAmountForm, Recipe, RecipeForm};
use foodgram::core::users::{Credentials, Registration, User};
use foodgram::core::Foodgram;
use foodgram_test_helpers::random;

pub const PASSWORD: &str = "Qwerty123";

/// A 1x1 PNG image.
pub const ONE_PIXEL_PNG: &str = "data:image/png;base64,iVBORw0KGgoAAAANSUhEUgAAAAEAAAABAgMAAABieywaAAAACVBMVEUAAAD///9fX1/S0ecCAAAACXBIWXMAAA7EAAAOxAGVKw4bAAAACklEQVQImWNoAAAAggCByxOyYQAAAABJRU5ErkJggg==";

pub fn registration() -> Registration {
    Registration {
        email: Some(random::email()),
        username: Some(random::username()),
        first_name: Some("Vasya".to_string()),
        last_name: Some("Pupkin".to_string()),
        password: Some(PASSWORD.to_string()),
    }
}

/// A registered user and their login token.
pub fn logged_in_user(foodgram: &Foodgram) -> (User, String) {
    let registration = registration();

    let user = foodgram.register_user(&registration).unwrap();

    let token = foodgram
        .login(&Credentials {
            email: registration.email,
            password: Some(PASSWORD.to_string()),
        })
        .unwrap();

    (user, token.as_str().to_string())
}

pub fn tag(foodgram: &Foodgram) -> Tag {
    let slug = random::slug();

    foodgram
        .create_tag(&TagForm {
            name: Some(format!("Tag {slug}")),
            color: Some(random::color()),
            slug: Some(slug),
        })
        .unwrap()
}

pub fn ingredient(foodgram: &Foodgram, name: &str, measurement_unit: &str) -> Ingredient {
    foodgram
        .create_ingredient(&IngredientForm {
            name: Some(name.to_string()),
            measurement_unit: Some(measurement_unit.to_string()),
        })
        .unwrap()
}

pub fn recipe_form(name: &str, tags: &[&Tag], ingredients: &[(&Ingredient, i64)]) -> RecipeForm {
    RecipeForm {
        name: Some(name.to_string()),
        text: Some("Mix everything.".to_string()),
        cooking_time: Some(10),
        image: Some(ONE_PIXEL_PNG.to_string()),
        tags: Some(tags.iter().map(|tag| tag.id).collect()),
        ingredients: Some(
            ingredients
                .iter()
                .map(|(ingredient, amount)| IngredientAmountForm {
                    id: Some(ingredient.id),
                    amount: Some(*amount),
                })
                .collect(),
        ),
    }
}

/// A recipe with one new tag and one new ingredient.
pub fn recipe(foodgram: &Foodgram, author: &User) -> Recipe {
    let tag = tag(foodgram);
    let ingredient = ingredient(foodgram, &format!("ingredient {}", random::slug()), "g");

    foodgram
        .create_recipe(author, &recipe_form("Omelette", &[&tag], &[(&ingredient, 100)]))
        .unwrap()
}
