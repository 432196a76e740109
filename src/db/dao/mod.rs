use sea_orm::DatabaseConnection;

pub mod link_dao;
pub mod note_dao;
pub mod token_dao;
pub mod user_dao;

pub use link_dao::LinkDao;
pub use note_dao::NoteDao;
pub use token_dao::TokenDao;
pub use user_dao::UserDao;

#[derive(Clone)]
pub struct DaoContext {
    db: DatabaseConnection,
}

impl DaoContext {
    pub fn new(db: &DatabaseConnection) -> Self {
        Self { db: db.clone() }
    }

    pub fn user(&self) -> UserDao {
        UserDao::new(&self.db)
    }

    pub fn auth_token(&self) -> TokenDao {
        TokenDao::new(&self.db)
    }

    pub fn link(&self) -> LinkDao {
        LinkDao::new(&self.db)
    }

    pub fn note(&self) -> NoteDao {
        NoteDao::new(&self.db)
    }
}
