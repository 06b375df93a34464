pub mod event;
pub mod event_admin;
pub mod event_host;
pub mod talk;
pub mod talk_claim;
pub mod user;

/*
 Events are managed by their admins. Admins maintain the host list (the
 co-organizers shown on the event page); a host is a plain user and may
 never remove themselves. Talks belong to an event and can be claimed by
 whoever gave them; an event admin decides each claim, and a rejection
 notifies the claimant by mail.
 */
