use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use mockall::mock;
use uuid::Uuid;

use crate::models::{
    DbBookedInterval, DbBusiness, DbEmployee, DbReservation, DbReservationDetail, DbService,
    DbWorkingHours,
};

// Mock repositories for testing
mock! {
    pub BusinessRepo {
        pub async fn get_business_by_id(
            &self,
            id: Uuid,
        ) -> eyre::Result<Option<DbBusiness>>;

        pub async fn get_business_by_owner(
            &self,
            owner_id: Uuid,
        ) -> eyre::Result<Option<DbBusiness>>;

        pub async fn list_businesses(
            &self,
            city: Option<&'static str>,
            category: Option<&'static str>,
        ) -> eyre::Result<Vec<DbBusiness>>;

        pub async fn name_taken(
            &self,
            name: &'static str,
            exclude: Option<Uuid>,
        ) -> eyre::Result<bool>;
    }
}

mock! {
    pub EmployeeRepo {
        pub async fn create_employee(
            &self,
            business_id: Uuid,
            name: &'static str,
            role: &'static str,
        ) -> eyre::Result<DbEmployee>;

        pub async fn get_employee_by_id(
            &self,
            id: Uuid,
        ) -> eyre::Result<Option<DbEmployee>>;

        pub async fn get_employees_by_business(
            &self,
            business_id: Uuid,
        ) -> eyre::Result<Vec<DbEmployee>>;

        pub async fn delete_employee(&self, id: Uuid) -> eyre::Result<()>;
    }
}

mock! {
    pub ServiceRepo {
        pub async fn get_service_by_id(
            &self,
            id: Uuid,
        ) -> eyre::Result<Option<DbService>>;

        pub async fn get_services_by_employee(
            &self,
            employee_id: Uuid,
        ) -> eyre::Result<Vec<DbService>>;
    }
}

mock! {
    pub WorkingHoursRepo {
        pub async fn get_for_day(
            &self,
            business_id: Uuid,
            weekday: i16,
        ) -> eyre::Result<Option<DbWorkingHours>>;

        pub async fn get_all(
            &self,
            business_id: Uuid,
        ) -> eyre::Result<Vec<DbWorkingHours>>;

        pub async fn upsert(
            &self,
            business_id: Uuid,
            weekday: i16,
            start_time: NaiveTime,
            end_time: NaiveTime,
        ) -> eyre::Result<DbWorkingHours>;

        pub async fn delete(
            &self,
            business_id: Uuid,
            weekday: i16,
        ) -> eyre::Result<bool>;
    }
}

mock! {
    pub ReservationRepo {
        pub async fn create_reservation(
            &self,
            user_id: Uuid,
            service_id: Uuid,
            start_time: DateTime<Utc>,
            status: &'static str,
        ) -> eyre::Result<Option<DbReservation>>;

        pub async fn get_reservation_by_id(
            &self,
            id: Uuid,
        ) -> eyre::Result<Option<DbReservation>>;

        pub async fn cancel_reservation(&self, id: Uuid) -> eyre::Result<DbReservation>;

        pub async fn list_active_intervals_for_employee_on_date(
            &self,
            employee_id: Uuid,
            date: NaiveDate,
        ) -> eyre::Result<Vec<DbBookedInterval>>;

        pub async fn list_for_user(
            &self,
            user_id: Uuid,
        ) -> eyre::Result<Vec<DbReservationDetail>>;
    }
}
