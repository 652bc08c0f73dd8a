pub mod mm_ses_cd;
pub mod ses_cd;
