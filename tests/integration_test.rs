use registrar::admin::{AdminError, EnrollRequest, RegisterRequest};
use registrar::clients::StoreHandle;
use registrar::lifecycle::AdminSystem;
use registrar::model::{CourseCreate, EnrollmentKey, Person, PersonKind, StudentUpdate};

fn register(role: &str, id: &str, first: &str, last: &str, email: &str) -> RegisterRequest {
    RegisterRequest {
        role: Some(role.to_string()),
        identity_id: Some(id.to_string()),
        first_name: Some(first.to_string()),
        last_name: Some(last.to_string()),
        email: Some(email.to_string()),
        ..Default::default()
    }
}

fn enroll(student_id: &str, course_id: &str) -> EnrollRequest {
    EnrollRequest {
        student_id: Some(student_id.to_string()),
        course_id: Some(course_id.to_string()),
    }
}

/// Full end-to-end flow with all real stores: register, enroll, re-enroll
/// conflict, partial update, deletes.
#[tokio::test]
async fn test_full_admin_flow() {
    let system = AdminSystem::new();

    // Register a student; omitted optional fields materialize as None
    let person = system
        .service
        .register(register("student", "S1", "Ann", "Lee", "a@x.com"))
        .await
        .expect("Failed to register student");
    let student = match person {
        Person::Student(s) => s,
        other => panic!("Expected a student, got {:?}", other),
    };
    assert_eq!(student.student_id, "S1");
    assert_eq!(student.bio, None);
    assert_eq!(student.phone_number, None);

    // Pre-seed the course the student will enroll into
    system
        .courses
        .create_course(CourseCreate {
            course_id: "C1".to_string(),
            title: "Distributed Systems".to_string(),
        })
        .await
        .expect("Failed to seed course");

    // Enroll
    let enrollment = system
        .service
        .enroll(enroll("S1", "C1"))
        .await
        .expect("Failed to enroll");
    assert_eq!(enrollment.student_id, "S1");
    assert_eq!(enrollment.course_id, "C1");

    // Re-enrolling the same pair is a conflict, not a silent success
    let err = system.service.enroll(enroll("S1", "C1")).await.unwrap_err();
    assert_eq!(
        err,
        AdminError::AlreadyEnrolled {
            student_id: "S1".to_string(),
            course_id: "C1".to_string(),
        }
    );
    assert_eq!(err.status(), 409);

    // Still exactly one link for the pair
    let key = EnrollmentKey {
        student_id: "S1".to_string(),
        course_id: "C1".to_string(),
    };
    assert!(system
        .enrollments
        .find_enrollment(key)
        .await
        .unwrap()
        .is_some());

    // Partial update: only email supplied, names preserved
    let updated = system
        .service
        .update_student(
            "S1".to_string(),
            StudentUpdate {
                email: Some("ann@x.com".to_string()),
                ..Default::default()
            },
        )
        .await
        .expect("Failed to update student");
    assert_eq!(updated.first_name, "Ann");
    assert_eq!(updated.last_name, "Lee");
    assert_eq!(updated.email, "ann@x.com");

    // Register and delete a professor
    let person = system
        .service
        .register(register("professor", "P1", "Max", "Born", "m@x.com"))
        .await
        .expect("Failed to register professor");
    assert_eq!(person.kind(), PersonKind::Professor);
    assert_eq!(person.identity_id(), "P1");
    assert_eq!(person.email(), "m@x.com");
    let professor = match person {
        Person::Professor(p) => p,
        other => panic!("Expected a professor, got {:?}", other),
    };
    assert_eq!(professor.bio, None);
    assert_eq!(professor.phone_number, None);
    system
        .service
        .delete_professor("P1".to_string())
        .await
        .expect("Failed to delete professor");
    let err = system
        .service
        .delete_professor("P1".to_string())
        .await
        .unwrap_err();
    assert_eq!(err, AdminError::ProfessorNotFound("P1".to_string()));
    assert_eq!(err.status(), 404);

    // Delete the student; a second delete finds nothing
    system
        .service
        .delete_student("S1".to_string())
        .await
        .expect("Failed to delete student");
    let err = system
        .service
        .delete_student("S1".to_string())
        .await
        .unwrap_err();
    assert_eq!(err, AdminError::StudentNotFound("S1".to_string()));
    assert!(system.students.get("S1".to_string()).await.unwrap().is_none());

    system.shutdown().await.expect("Failed to shutdown system");
}

#[tokio::test]
async fn test_register_validation() {
    let system = AdminSystem::new();

    // Any role outside the two exact names is rejected, creating nothing
    let err = system
        .service
        .register(register("admin", "X1", "Eve", "Hall", "e@x.com"))
        .await
        .unwrap_err();
    assert_eq!(err, AdminError::InvalidRole);
    assert_eq!(err.status(), 400);

    let err = system
        .service
        .register(RegisterRequest::default())
        .await
        .unwrap_err();
    assert_eq!(err, AdminError::InvalidRole);

    // Blank-after-trim counts as missing
    let mut request = register("student", "X1", "  ", "Hall", "e@x.com");
    let err = system.service.register(request.clone()).await.unwrap_err();
    assert_eq!(err, AdminError::MissingField("first_name"));
    assert_eq!(err.status(), 400);

    request.first_name = Some("Eve".to_string());
    request.email = None;
    let err = system.service.register(request).await.unwrap_err();
    assert_eq!(err, AdminError::MissingField("email"));

    // None of the failed attempts created a record
    assert!(system.students.get("X1".to_string()).await.unwrap().is_none());
    assert!(system.professors.get("X1".to_string()).await.unwrap().is_none());

    system.shutdown().await.expect("Failed to shutdown system");
}

#[tokio::test]
async fn test_register_duplicate_identities_are_storage_errors() {
    let system = AdminSystem::new();

    system
        .service
        .register(register("student", "S1", "Ann", "Lee", "a@x.com"))
        .await
        .expect("Failed to register student");

    // Same student_id
    let err = system
        .service
        .register(register("student", "S1", "Bob", "Ray", "b@x.com"))
        .await
        .unwrap_err();
    assert_eq!(err, AdminError::Storage("Duplicate key: S1".to_string()));
    assert_eq!(err.status(), 500);

    // Same email under a fresh id
    let err = system
        .service
        .register(register("student", "S2", "Bob", "Ray", "a@x.com"))
        .await
        .unwrap_err();
    assert_eq!(err, AdminError::Storage("Duplicate key: a@x.com".to_string()));

    // The original record is intact and the failed ones left nothing
    let survivor = system.students.get("S1".to_string()).await.unwrap().unwrap();
    assert_eq!(survivor.first_name, "Ann");
    assert!(system.students.get("S2".to_string()).await.unwrap().is_none());

    system.shutdown().await.expect("Failed to shutdown system");
}

/// Concurrent enrolls of the same pair: exactly one insert wins, every other
/// call reports the conflict (either from the existence check or from the
/// store's duplicate-key backstop).
#[tokio::test]
async fn test_concurrent_enrollment_single_winner() {
    let system = AdminSystem::new();

    system
        .service
        .register(register("student", "S1", "Ann", "Lee", "a@x.com"))
        .await
        .unwrap();
    system
        .courses
        .create_course(CourseCreate {
            course_id: "C1".to_string(),
            title: "Operating Systems".to_string(),
        })
        .await
        .unwrap();

    let mut handles = vec![];
    for _ in 0..10 {
        let service = system.service.clone();
        handles.push(tokio::spawn(async move {
            service.enroll(enroll("S1", "C1")).await
        }));
    }

    let mut successful = 0;
    let mut conflicts = 0;
    for handle in handles {
        match handle.await.unwrap() {
            Ok(_) => successful += 1,
            Err(AdminError::AlreadyEnrolled { .. }) => conflicts += 1,
            Err(other) => panic!("Unexpected error: {other:?}"),
        }
    }
    assert_eq!(successful, 1, "Expected exactly one enrollment to win");
    assert_eq!(conflicts, 9);

    system.shutdown().await.expect("Failed to shutdown system");
}

/// A stopped store surfaces as Unavailable, not a panic.
#[tokio::test]
async fn test_stopped_store_is_unavailable() {
    use registrar::admin::AdminService;
    use registrar::stores;

    let (professor_store, professors) = stores::professor::new();
    let (student_store, students) = stores::student::new();
    let (course_store, courses) = stores::course::new();
    let (enrollment_store, enrollments) = stores::enrollment::new();

    // Never run the stores: every channel is already closed.
    drop(professor_store);
    drop(student_store);
    drop(course_store);
    drop(enrollment_store);

    let service = AdminService::new(professors, students, courses, enrollments);

    let err = service.enroll(enroll("S1", "C1")).await.unwrap_err();
    assert_eq!(err, AdminError::Unavailable);
    assert_eq!(err.status(), 500);

    let err = service
        .register(register("student", "S1", "Ann", "Lee", "a@x.com"))
        .await
        .unwrap_err();
    assert_eq!(err, AdminError::Unavailable);
}
