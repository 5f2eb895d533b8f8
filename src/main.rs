use rusqlite::Connection;

use std::error::Error;
use std::sync::{Arc, Mutex};

mod data;
mod internal_error;
mod todos;


use data::DBConnection;
use todos::endpoints;

#[macro_use]
extern crate rocket;

use rocket::{Build, Rocket};
use rocket_dyn_templates::Template;

const DATABASE_PATH: &str = "todos.db";

pub fn build_rocket(connection: DBConnection) -> Rocket<Build> {
    rocket::build()
        .manage(connection)
        .mount(
            "/",
            routes![
                endpoints::home,
                endpoints::create_todo_page,
                endpoints::create_todo,
                endpoints::edit_todo_page,
                endpoints::edit_todo,
                endpoints::delete_todo_page,
                endpoints::delete_todo,
                endpoints::toggle_todo,
            ],
        )
        .register("/", catchers![endpoints::not_found])
        .attach(Template::fairing())
}

#[rocket::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let connection = Connection::open(DATABASE_PATH)?;
    data::init_schema(&connection)?;
    let connection = Arc::new(Mutex::new(connection));

    build_rocket(connection).launch().await?;

    Ok(())
}
