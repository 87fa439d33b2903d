//! Live PostgreSQL tests. Run with `--features database-tests` and `DATABASE_URL` set.

use bookwright_core::{ChapterStatus, ChapterUpdate, NewChapter, Stage};
use bookwright_database::{PostgresBookRepository, establish_connection, run_migrations};
use bookwright_interface::BookRepository;
use diesel::prelude::*;
use uuid::Uuid;

fn insert_book(conn: &mut PgConnection, title: &str, stage: &str) -> Uuid {
    use bookwright_database::schema::book_projects::dsl;

    diesel::insert_into(dsl::book_projects)
        .values((dsl::title.eq(title), dsl::current_stage.eq(stage)))
        .returning(dsl::id)
        .get_result(conn)
        .unwrap()
}

#[tokio::test]
#[cfg_attr(not(feature = "database-tests"), ignore)]
async fn chapters_round_trip_through_postgres() {
    dotenvy::dotenv().ok();
    let mut conn = establish_connection().unwrap();
    run_migrations(&mut conn).unwrap();
    let book_id = insert_book(&mut conn, "Repository Test", "chapters");
    let repo = PostgresBookRepository::new(conn);

    let books = repo.list_books_by_stage(Stage::Chapters).await.unwrap();
    assert!(books.iter().any(|b| b.id == book_id));

    repo.insert_chapter(&NewChapter::pending(book_id, 2, "Second"))
        .await
        .unwrap();
    let first = repo
        .insert_chapter(&NewChapter::pending(book_id, 1, "First"))
        .await
        .unwrap();

    // Unique (book_id, chapter_number)
    assert!(
        repo.insert_chapter(&NewChapter::pending(book_id, 1, "Again"))
            .await
            .is_err()
    );

    repo.update_chapter(first.id, &ChapterUpdate::generated("body", "summary"))
        .await
        .unwrap();

    let chapters = repo.list_chapters_ordered(book_id).await.unwrap();
    let numbers: Vec<u32> = chapters.iter().map(|c| c.chapter_number).collect();
    assert_eq!(numbers, vec![1, 2]);
    assert_eq!(chapters[0].state().status, ChapterStatus::Generated);
    assert_eq!(chapters[0].chapter_text, "body");

    assert!(repo.get_chapter(book_id, 3).await.unwrap().is_none());
}
