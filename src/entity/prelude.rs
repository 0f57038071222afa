//! 预导入模块，方便使用

pub use super::assignments::{
    ActiveModel as AssignmentActiveModel, Entity as Assignments, Model as AssignmentModel,
};
pub use super::entries::{ActiveModel as EntryActiveModel, Entity as Entries, Model as EntryModel};
pub use super::evaluations::{
    ActiveModel as EvaluationActiveModel, Entity as Evaluations, Model as EvaluationModel,
};
pub use super::rubric_questions::{
    ActiveModel as RubricQuestionActiveModel, Entity as RubricQuestions,
    Model as RubricQuestionModel,
};
pub use super::users::{ActiveModel as UserActiveModel, Entity as Users, Model as UserModel};
