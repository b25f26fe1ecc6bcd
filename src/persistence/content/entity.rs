use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "contents")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = true)]
    pub id: i32,
    pub name: String,
    pub content_type_alias: String,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "crate::persistence::content_property::entity::Entity")]
    ContentProperty,
}

impl Related<crate::persistence::content_property::entity::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ContentProperty.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
