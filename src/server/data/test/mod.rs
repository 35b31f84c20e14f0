mod restaurant;
mod user;
