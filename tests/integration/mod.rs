// Tests against the live portal. They need ARGO_SCHOOL_CODE, ARGO_USERNAME
// and ARGO_PASSWORD (or ARGO_TOKEN) in the environment or in a .env file.
mod common;
mod student_tests;
