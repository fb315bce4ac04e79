/// One credential row, used for both the employee roster and the seeded
/// admin table. Passwords are stored as Argon2 PHC strings, never plaintext.
#[derive(Debug, Clone)]
pub struct Employee {
    pub email: String,
    pub id: String,
    pub password_hash: String,
}

impl Employee {
    pub fn new(
        email: impl Into<String>,
        id: impl Into<String>,
        password_hash: impl Into<String>,
    ) -> Self {
        Self {
            email: email.into(),
            id: id.into(),
            password_hash: password_hash.into(),
        }
    }
}
