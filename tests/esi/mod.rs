mod route;
mod universe;
