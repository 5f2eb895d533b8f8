use rocket::form::Form;
use rocket::response::Redirect;
use rocket::{catch, get, post, Responder, State};
use rocket_dyn_templates::{context, Template};

use crate::internal_error::AppResult;

use super::data::*;
use super::form::{FormErrors, FormMode, TodoForm};
use super::helpers::*;
use crate::data::DBConnection;

/// A submitted form either redirects back to the list or re-renders the
/// page it came from with the offending values and messages, at 200.
#[derive(Responder)]
pub enum FormOutcome {
    Redirect(Redirect),
    Page(Template),
}

#[get("/")]
pub fn home(db_connection: &State<DBConnection>) -> AppResult<Template> {
    let db_connection = db_connection.lock()?;

    let todos = get_all_todos(&db_connection)?;

    Ok(Template::render("home", context! { todos: todos }))
}

#[get("/create")]
pub fn create_todo_page() -> Template {
    Template::render(
        "create",
        context! { form: TodoForm::default(), errors: FormErrors::default() },
    )
}

#[post("/create", data = "<form>")]
pub fn create_todo(
    form: Form<TodoForm>,
    db_connection: &State<DBConnection>,
) -> AppResult<FormOutcome> {
    let db_connection = db_connection.lock()?;

    match form.save(FormMode::Create, &db_connection)? {
        Ok(_) => Ok(FormOutcome::Redirect(Redirect::to(uri!(home)))),
        Err(errors) => Ok(FormOutcome::Page(Template::render(
            "create",
            context! { form: &*form, errors: errors },
        ))),
    }
}

#[get("/edit/<id>")]
pub fn edit_todo_page(id: TodoId, db_connection: &State<DBConnection>) -> AppResult<Template> {
    let db_connection = db_connection.lock()?;

    let todo = get_todo(id, &db_connection)?;

    Ok(Template::render(
        "edit",
        context! {
            form: TodoForm::from_todo(&todo),
            errors: FormErrors::default(),
            todo_id: id,
        },
    ))
}

#[post("/edit/<id>", data = "<form>")]
pub fn edit_todo(
    id: TodoId,
    form: Form<TodoForm>,
    db_connection: &State<DBConnection>,
) -> AppResult<FormOutcome> {
    let db_connection = db_connection.lock()?;

    get_todo(id, &db_connection)?;

    match form.save(FormMode::Edit(id), &db_connection)? {
        Ok(_) => Ok(FormOutcome::Redirect(Redirect::to(uri!(home)))),
        Err(errors) => Ok(FormOutcome::Page(Template::render(
            "edit",
            context! { form: &*form, errors: errors, todo_id: id },
        ))),
    }
}

#[get("/delete/<id>")]
pub fn delete_todo_page(id: TodoId, db_connection: &State<DBConnection>) -> AppResult<Template> {
    let db_connection = db_connection.lock()?;

    let todo = get_todo(id, &db_connection)?;

    Ok(Template::render("delete_confirm", context! { todo: todo }))
}

#[post("/delete/<id>")]
pub fn delete_todo(id: TodoId, db_connection: &State<DBConnection>) -> AppResult<Redirect> {
    let db_connection = db_connection.lock()?;

    let todo = get_todo(id, &db_connection)?;
    delete_todo_from_db(id, &db_connection)?;
    log::info!("deleted todo {}", todo);

    Ok(Redirect::to(uri!(home)))
}

#[post("/toggle/<id>")]
pub fn toggle_todo(id: TodoId, db_connection: &State<DBConnection>) -> AppResult<Redirect> {
    let db_connection = db_connection.lock()?;

    toggle_completed(id, &db_connection)?;

    Ok(Redirect::to(uri!(home)))
}

#[catch(404)]
pub fn not_found() -> Template {
    Template::render("not_found", context! {})
}
